//! Hard-coded copy for both page variants. Array order is display order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    CheckCircle,
    XCircle,
    Zap,
    MessageSquare,
    Calendar,
    ArrowLeft,
    Users,
    TrendingUp,
    Clock,
    ShieldCheck,
    ChevronDown,
    PlayCircle,
}

/// One (label, description, icon) block. `description` is empty for label-only lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceLine {
    pub item: &'static str,
    pub cost: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PageCopy {
    pub document_title: &'static str,
    pub nav_links: &'static [NavLink],
    pub nav_cta: &'static str,

    pub hero_badge: &'static str,
    pub hero_title: &'static str,
    pub hero_title_accent: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_subtitle_product: &'static str,
    pub hero_points: &'static [Highlight],
    pub hero_primary_cta: &'static str,
    pub hero_secondary_cta: &'static str,
    pub hero_image: &'static str,

    pub problem_title: &'static str,
    pub problem_subtitle: &'static str,
    pub problem_quote: &'static str,
    pub problem_points: &'static [Highlight],
    pub problem_image: &'static str,
    pub problem_badge: &'static str,

    pub transformation_title: &'static str,
    pub transformation_title_tail: &'static str,
    pub transformation_cards: &'static [Highlight],
    pub transformation_closing: &'static str,

    pub solution_title: &'static str,
    pub solution_subtitle: &'static str,
    pub workshop_heading: &'static str,
    pub workshop_points: &'static [Highlight],
    pub system_heading: &'static str,
    pub system_points: &'static [Highlight],

    pub steps_title: &'static str,
    pub steps: &'static [Highlight],

    pub patient_heading: &'static str,
    pub patient_benefits: &'static [Highlight],
    pub clinic_heading: &'static str,
    pub clinic_benefits: &'static [Highlight],

    pub proof_title: &'static str,
    pub proof_subtitle: &'static str,
    pub stats: &'static [Highlight],

    pub pricing_title: &'static str,
    pub pricing_tagline: &'static str,
    pub price_lines: &'static [PriceLine],
    pub pricing_total: &'static str,
    pub pricing_note: &'static str,
    pub pricing_cta: &'static str,

    pub audience_title: &'static str,
    pub audience: &'static [Highlight],

    pub faq_title: &'static str,
    pub faqs: &'static [FaqEntry],

    pub final_title: &'static str,
    pub final_title_tail: &'static str,
    pub final_subtitle: &'static str,
    pub final_primary_cta: &'static str,
    pub final_secondary_cta: &'static str,

    pub footer_tagline: &'static str,
    pub footer_rights: &'static str,
    pub footer_icons: &'static [Icon],

    pub sticky_cta: &'static str,
}

const fn label(label: &'static str, icon: Icon) -> Highlight {
    Highlight {
        label,
        description: "",
        icon,
    }
}

const fn block(label: &'static str, description: &'static str, icon: Icon) -> Highlight {
    Highlight {
        label,
        description,
        icon,
    }
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { anchor: "#problem", label: "المشكلة" },
    NavLink { anchor: "#solution", label: "الحل" },
    NavLink { anchor: "#how-it-works", label: "كيف يعمل" },
    NavLink { anchor: "#pricing", label: "التكلفة" },
];

const FOOTER_ICONS: &[Icon] = &[Icon::ShieldCheck, Icon::Zap, Icon::Clock];

pub static PRIMARY: PageCopy = PageCopy {
    document_title: "SmartClinic AI | ورشة العيادات الذكية",
    nav_links: NAV_LINKS,
    nav_cta: "احجز مقعدك الآن",

    hero_badge: "ورشة تطبيقية حصرية للعيادات الجزائرية",
    hero_title: "كل استفسار من مريض...",
    hero_title_accent: "يجب أن يجد طريقه للعلاج فوراً",
    hero_subtitle: "حوّل رسائل مرضاك من فوضى القنوات إلى تجربة رعاية ذكية في مكان واحد. ورشة تدريبية تطبيقية + نظام",
    hero_subtitle_product: "SmartClinic AI",
    hero_points: &[
        label("رد فوري على 90% من أسئلة المرضى", Icon::CheckCircle),
        label("تقليل ضغط الاستقبال حتى 70%", Icon::CheckCircle),
        label("بدون اشتراكات باهظة شهرياً", Icon::CheckCircle),
        label("جاهز خلال أيام وليس أشهر", Icon::CheckCircle),
    ],
    hero_primary_cta: "احجز مقعدك في الورشة المجانية",
    hero_secondary_cta: "شاهد كيف تعمل المنظومة",
    hero_image: "https://picsum.photos/seed/clinic-dashboard/1200/600",

    problem_title: "لماذا يخسر الأطباء والعيادات مرضى يومياً… دون أن يشعروا؟",
    problem_subtitle: "الفوضى الرقمية هي العدو الخفي لنمو عيادتك",
    problem_quote: "\"الرسائل تأتي من كل مكان: واتساب، إنستغرام، فيسبوك... لا أحد يرد فوراً. المريض ينتظر… ثم يختفي. أو يذهب لعيادة أخرى أسرع في الرد.\"",
    problem_points: &[
        label("ضياع الاستفسارات بين القنوات المتعددة", Icon::XCircle),
        label("ردود متأخرة أو غير موحدة تقتل المصداقية", Icon::XCircle),
        label("فريق استقبال مرهق يرتكب أخطاء بشرية", Icon::XCircle),
        label("مرضى يفقدون الثقة قبل الزيارة الأولى", Icon::XCircle),
    ],
    problem_image: "https://picsum.photos/seed/receptionist-stress/600/600",
    problem_badge: "خسارة مرضى محتملين!",

    transformation_title: "تخيّل لو أن كل استفسار يصل…",
    transformation_title_tail: "يتم الرد عليه فوراً وباحتراف",
    transformation_cards: &[
        block("صندوق واحد", "كل الرسائل تصب في مكان منظم", Icon::MessageSquare),
        block("رد فوري", "بوت ذكي يجيب بمعلومات دقيقة 24/7", Icon::Zap),
        block("تصعيد ذكي", "الحالات الجدية تُحوّل تلقائياً لفريقك", Icon::Users),
        block("مواعيد جاهزة", "الموعد يُحجز والتذكير يُرسل آلياً", Icon::Calendar),
    ],
    transformation_closing: "هذا ليس خيالاً… هذا ما ستتعلمه وتطبقه في ورشة SmartClinic AI",

    solution_title: "الحل: ورشة تدريبية + نظام عملي جاهز للتطبيق",
    solution_subtitle: "نحن لا نبيعك برنامجاً فحسب، بل نبني معك نظاماً متكاملاً",
    workshop_heading: "الورشة التدريبية: ماذا تقدم؟",
    workshop_points: &[
        label("فهم عملي لمشكلة تعدد القنوات وكيفية حلها", Icon::CheckCircle),
        label("كيفية بناء Inbox موحد باستخدام Chatwoot", Icon::CheckCircle),
        label("تصميم رحلة مريض ذكية من أول رسالة إلى الحجز", Icon::CheckCircle),
        label("إعداد بوت ذكي يعتمد على بيانات عيادتك الحقيقية", Icon::CheckCircle),
    ],
    system_heading: "النظام التقني: ماذا ستخرج به؟",
    system_points: &[
        label("قناة واحدة مجمعة لكل رسائل التواصل الاجتماعي", Icon::CheckCircle),
        label("بوت ذكي مدعوم بتقنية RAG لردود دقيقة جداً", Icon::CheckCircle),
        label("نظام تصعيد ذكي للحالات المهمة (Urgent Leads)", Icon::CheckCircle),
        label("تكامل سلس مع فريق الاستقبال الحالي لديك", Icon::CheckCircle),
    ],

    steps_title: "كيف تعمل المنظومة خطوة بخطوة؟",
    steps: &[
        block("كل القنوات ← Chatwoot", "نجمع كل الرسائل في Inbox واحد منظم وسهل الاستخدام.", Icon::MessageSquare),
        block("البوت الذكي يتدخل", "يرد، يشرح، يسأل، ويقترح الإجراء المناسب للمريض فوراً.", Icon::Zap),
        block("الفريق يستلم الحالات", "فريقك يستلم الحالات الجاهزة للحجز دون فوضى أو ضغط.", Icon::Calendar),
    ],

    patient_heading: "ماذا يستفيد المريض؟",
    patient_benefits: &[
        block("رد فوري", "لا انتظار لساعات، إجابة في أقل من 5 ثوانٍ", Icon::CheckCircle),
        block("وضوح تام", "معلومات دقيقة عن الخيارات العلاجية والأسعار", Icon::CheckCircle),
        block("حجز سريع", "عملية حجز موعد مبسطة في دقيقة واحدة", Icon::CheckCircle),
        block("اهتمام خاص", "إحساس المريض بالاحترافية والتقدير لصحته", Icon::CheckCircle),
    ],
    clinic_heading: "ماذا تستفيد العيادة؟",
    clinic_benefits: &[
        block("زيادة الحجوزات", "تحويل 40% أكثر من الاستفسارات إلى زيارات فعلية", Icon::CheckCircle),
        block("تقليل الجهد", "توفير 5 ساعات يومياً من وقت فريق الاستقبال", Icon::CheckCircle),
        block("صورة احترافية", "الظهور بمظهر العيادة العصرية المواكبة للتكنولوجيا", Icon::CheckCircle),
        block("بيانات دقيقة", "تقارير واضحة عن اهتمامات المرضى وأداء القنوات", Icon::CheckCircle),
    ],

    proof_title: "الأرقام لا تكذب",
    proof_subtitle: "تأثير حقيقي ومباشر على أداء عيادتك",
    stats: &[
        block("80-90%", "ردود تلقائية دقيقة", Icon::MessageSquare),
        block("60-80%", "تقليل عبء الاستقبال", Icon::Users),
        block("+45%", "زيادة التحويل الرقمي", Icon::TrendingUp),
        block("-90%", "تقليل تكلفة التشغيل", Icon::Zap),
    ],

    pricing_title: "تكلفة واضحة… بدون مفاجآت",
    pricing_tagline: "لا اشتراك شهري عالي ومقيد",
    price_lines: &[
        PriceLine { item: "WhatsApp API الرسمي", cost: "حسب الاستهلاك" },
        PriceLine { item: "سيرفر تقني بسيط", cost: "~ 2000 دج/شهر" },
    ],
    pricing_total: "أقل من 5000 دج شهرياً",
    pricing_note: "هذا هو الحل العملي الذي يناسب واقع العيادات الجزائرية",
    pricing_cta: "احجز مكانك في الورشة التطبيقية",

    audience_title: "لمن هذه الورشة؟",
    audience: &[
        label("طبيب أو مدير عيادة طموح", Icon::Users),
        label("مركز أسنان، تصوير أو تحاليل", Icon::Users),
        label("عيادة لديها تواصل رقمي نشط", Icon::Users),
        label("من يريد نظاماً عملياً بسيطاً", Icon::Users),
    ],

    faq_title: "الأسئلة الشائعة",
    faqs: &[
        FaqEntry {
            question: "هل أحتاج فريق تقني؟",
            answer: "لا، النظام مصمم ليكون سهلاً. في الورشة سنقوم بكل الإعدادات التقنية معك خطوة بخطوة.",
        },
        FaqEntry {
            question: "هل النظام مفتوح المصدر فعلاً؟",
            answer: "نعم، نعتمد على تقنيات مفتوحة المصدر مثل Chatwoot، مما يعني أنك تملك بياناتك بالكامل ولا تدفع اشتراكات لشركات وسيطة.",
        },
        FaqEntry {
            question: "كم مدة الورشة؟",
            answer: "الورشة مكثفة وتطبيقية، عادة ما تكون لمدة يومين إلى 3 أيام لنضمن أن عيادتك أصبحت جاهزة تماماً.",
        },
        FaqEntry {
            question: "هل يمكن تخصيص البوت حسب تخصص العيادة؟",
            answer: "بالتأكيد. بوت RAG الذي نستخدمه يتدرب على ملفات عيادتك الخاصة، تخصصاتك، وأسعارك بدقة متناهية.",
        },
    ],

    final_title: "لا تدع المريض ينتظر...",
    final_title_tail: "درّب عيادتك على الاستجابة الذكية اليوم",
    final_subtitle: "عرض توضيحي مجاني + شرح الورشة خلال 15–20 دقيقة. اكتشف كيف يمكننا مساعدتك.",
    final_primary_cta: "احجز العرض المجاني الآن",
    final_secondary_cta: "اطّلع على تفاصيل التكلفة",

    footer_tagline: "الحل الذكي للعيادات الجزائرية الحديثة. تواصل، حجز، رعاية.",
    footer_rights: "جميع الحقوق محفوظة ©",
    footer_icons: FOOTER_ICONS,

    sticky_cta: "احجز مقعدك في الورشة الآن",
};

pub static ALTERNATE: PageCopy = PageCopy {
    document_title: "SmartClinic AI | رد فوري على كل مريض",
    nav_links: NAV_LINKS,
    nav_cta: "سجّل الآن",

    hero_badge: "ورشة عملية للعيادات والمراكز الطبية في الجزائر",
    hero_title: "مرضاك يكتبون لك كل يوم...",
    hero_title_accent: "فهل يجدون من يرد عليهم فوراً؟",
    hero_subtitle: "اجمع واتساب وإنستغرام وفيسبوك في صندوق واحد، ودع مساعداً ذكياً يرد بدقة على مدار الساعة. ورشة تطبيقية + نظام",
    hero_subtitle_product: "SmartClinic AI",
    hero_points: &[
        label("إجابة آلية على أغلب أسئلة المرضى", Icon::CheckCircle),
        label("فريق استقبال أقل ضغطاً وأكثر تركيزاً", Icon::CheckCircle),
        label("تكلفة شهرية منخفضة وواضحة", Icon::CheckCircle),
        label("تشغيل فعلي خلال أيام معدودة", Icon::CheckCircle),
    ],
    hero_primary_cta: "سجّل في الورشة المجانية",
    hero_secondary_cta: "شاهد العرض التوضيحي",
    hero_image: "https://picsum.photos/seed/clinic-inbox/1200/600",

    problem_title: "كم مريضاً فقدت هذا الأسبوع بسبب رسالة لم يُرد عليها؟",
    problem_subtitle: "تعدد القنوات بدون نظام يعني فرصاً ضائعة كل يوم",
    problem_quote: "\"رسالة على واتساب، تعليق على فيسبوك، سؤال على إنستغرام... وكل واحدة تنتظر دورها. المريض لا ينتظر طويلاً، بل يبحث عن عيادة أخرى.\"",
    problem_points: &[
        label("رسائل مبعثرة لا يتابعها أحد", Icon::XCircle),
        label("إجابات مختلفة لنفس السؤال", Icon::XCircle),
        label("استقبال مثقل بالمكالمات والرسائل", Icon::XCircle),
        label("انطباع أول سيئ قبل أن يدخل المريض العيادة", Icon::XCircle),
    ],
    problem_image: "https://picsum.photos/seed/busy-reception/600/600",
    problem_badge: "فرص ضائعة كل يوم!",

    transformation_title: "تخيّل عيادة لا تفوّت أي رسالة…",
    transformation_title_tail: "وكل مريض يحصل على رد في ثوانٍ",
    transformation_cards: &[
        block("صندوق موحد", "كل المحادثات في شاشة واحدة", Icon::MessageSquare),
        block("مساعد ذكي", "يجيب بمعلومات عيادتك ليلاً ونهاراً", Icon::Zap),
        block("تحويل تلقائي", "الحالات المهمة تصل لفريقك مباشرة", Icon::Users),
        block("حجز وتذكير", "المواعيد والتذكيرات تتم آلياً", Icon::Calendar),
    ],
    transformation_closing: "كل هذا ستبنيه بنفسك خطوة بخطوة في ورشة SmartClinic AI",

    solution_title: "ورشة تطبيقية + نظام جاهز للعمل",
    solution_subtitle: "تخرج من الورشة ومنظومتك تعمل فعلاً في عيادتك",
    workshop_heading: "في الورشة ستتعلم",
    workshop_points: &[
        label("لماذا تضيع الرسائل بين القنوات وكيف نوقف ذلك", Icon::CheckCircle),
        label("إعداد Inbox موحد على Chatwoot", Icon::CheckCircle),
        label("رسم رحلة المريض من أول سؤال حتى الموعد", Icon::CheckCircle),
        label("تدريب بوت على معلومات عيادتك الفعلية", Icon::CheckCircle),
    ],
    system_heading: "وستخرج بنظام يضم",
    system_points: &[
        label("صندوق واحد لكل قنوات التواصل", Icon::CheckCircle),
        label("بوت RAG يجيب بدقة من ملفات عيادتك", Icon::CheckCircle),
        label("تنبيهات فورية للحالات العاجلة (Urgent Leads)", Icon::CheckCircle),
        label("لوحة عمل بسيطة لفريق الاستقبال", Icon::CheckCircle),
    ],

    steps_title: "ثلاث خطوات فقط",
    steps: &[
        block("تجميع القنوات في Chatwoot", "كل رسالة تصل إلى مكان واحد مهما كان مصدرها.", Icon::MessageSquare),
        block("البوت يرد أولاً", "يجيب عن الأسئلة الشائعة ويجمع معلومات المريض فوراً.", Icon::Zap),
        block("فريقك يكمل الحجز", "الحالات الجاهزة تصل للاستقبال مرتبة وواضحة.", Icon::Calendar),
    ],

    patient_heading: "ما الذي يكسبه المريض؟",
    patient_benefits: &[
        block("رد خلال ثوانٍ", "لا مزيد من الانتظار لساعات", Icon::CheckCircle),
        block("معلومات واضحة", "الخدمات والأسعار والمواعيد بدقة", Icon::CheckCircle),
        block("حجز بلا تعقيد", "موعد مؤكد في دقيقة واحدة", Icon::CheckCircle),
        block("شعور بالاهتمام", "تجربة محترمة منذ الرسالة الأولى", Icon::CheckCircle),
    ],
    clinic_heading: "ما الذي تكسبه العيادة؟",
    clinic_benefits: &[
        block("حجوزات أكثر", "استفسارات أقل ضياعاً وزيارات أكثر", Icon::CheckCircle),
        block("وقت أكثر", "ساعات يومية يستعيدها فريق الاستقبال", Icon::CheckCircle),
        block("حضور رقمي قوي", "صورة عيادة حديثة ومنظمة", Icon::CheckCircle),
        block("قرارات مبنية على بيانات", "تقارير عن القنوات واهتمامات المرضى", Icon::CheckCircle),
    ],

    proof_title: "نتائج يمكن قياسها",
    proof_subtitle: "ما تتوقعه عيادتك بعد تشغيل المنظومة",
    stats: &[
        block("80-90%", "من الأسئلة تُجاب آلياً", Icon::MessageSquare),
        block("60-80%", "ضغط أقل على الاستقبال", Icon::Users),
        block("+45%", "تحويل رقمي أعلى", Icon::TrendingUp),
        block("-90%", "تكلفة تشغيل أقل", Icon::Zap),
    ],

    pricing_title: "كم يكلف التشغيل شهرياً؟",
    pricing_tagline: "بدون اشتراكات مرتفعة أو عقود طويلة",
    price_lines: &[
        PriceLine { item: "WhatsApp API الرسمي", cost: "حسب عدد الرسائل" },
        PriceLine { item: "استضافة سيرفر", cost: "~ 2000 دج/شهر" },
    ],
    pricing_total: "أقل من 5000 دج في الشهر",
    pricing_note: "حل واقعي مصمم لميزانيات العيادات الجزائرية",
    pricing_cta: "سجّل مكانك في الورشة",

    audience_title: "هذه الورشة مناسبة لك إذا كنت",
    audience: &[
        label("طبيباً أو مسيّر عيادة يريد النمو", Icon::Users),
        label("مركز أسنان أو أشعة أو مخبر تحاليل", Icon::Users),
        label("عيادة تستقبل رسائل كثيرة يومياً", Icon::Users),
        label("تبحث عن حل عملي بدون تعقيد", Icon::Users),
    ],

    faq_title: "أسئلة متكررة",
    faqs: &[
        FaqEntry {
            question: "هل أحتاج خبرة تقنية؟",
            answer: "لا. نرافقك في كل الإعدادات خلال الورشة حتى يصبح النظام جاهزاً للعمل.",
        },
        FaqEntry {
            question: "هل أملك بياناتي فعلاً؟",
            answer: "نعم. نعتمد على Chatwoot مفتوح المصدر على سيرفرك الخاص، فلا وسيط يملك محادثات مرضاك.",
        },
        FaqEntry {
            question: "كم تستغرق الورشة؟",
            answer: "من يومين إلى 3 أيام من العمل التطبيقي المكثف، وتنتهي وعيادتك تعمل بالنظام.",
        },
        FaqEntry {
            question: "هل يتكيف البوت مع تخصصي؟",
            answer: "نعم. بوت RAG يتعلم من ملفات عيادتك وخدماتك وأسعارك، فيجيب بما يناسب تخصصك تماماً.",
        },
    ],

    final_title: "كل رسالة بلا رد هي مريض ضائع...",
    final_title_tail: "ابدأ الرد الذكي في عيادتك اليوم",
    final_subtitle: "جلسة تعريفية مجانية مدتها 15–20 دقيقة نشرح فيها الورشة والنظام بالتفصيل.",
    final_primary_cta: "احجز الجلسة المجانية",
    final_secondary_cta: "تفاصيل التكلفة",

    footer_tagline: "منظومة تواصل ذكية للعيادات الجزائرية. رد، حجز، متابعة.",
    footer_rights: "جميع الحقوق محفوظة ©",
    footer_icons: FOOTER_ICONS,

    sticky_cta: "سجّل في الورشة الآن",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn list_shapes(copy: &PageCopy) -> Vec<usize> {
        vec![
            copy.hero_points.len(),
            copy.problem_points.len(),
            copy.transformation_cards.len(),
            copy.workshop_points.len(),
            copy.system_points.len(),
            copy.steps.len(),
            copy.patient_benefits.len(),
            copy.clinic_benefits.len(),
            copy.stats.len(),
            copy.price_lines.len(),
            copy.audience.len(),
            copy.faqs.len(),
        ]
    }

    #[test]
    fn variants_share_structure_but_not_copy() {
        assert_eq!(list_shapes(&PRIMARY), list_shapes(&ALTERNATE));
        assert_eq!(PRIMARY.nav_links, ALTERNATE.nav_links);
        assert_ne!(PRIMARY.hero_title, ALTERNATE.hero_title);
        assert_ne!(PRIMARY.faqs, ALTERNATE.faqs);
    }

    #[test]
    fn how_it_works_has_three_steps_in_order() {
        let titles: Vec<&str> = PRIMARY.steps.iter().map(|step| step.label).collect();
        assert_eq!(
            titles,
            vec!["كل القنوات ← Chatwoot", "البوت الذكي يتدخل", "الفريق يستلم الحالات"]
        );
        assert_eq!(PRIMARY.steps[2].icon, Icon::Calendar);
    }

    #[test]
    fn label_only_lists_have_no_descriptions() {
        for copy in [&PRIMARY, &ALTERNATE] {
            for item in copy.hero_points.iter().chain(copy.problem_points).chain(copy.audience) {
                assert!(item.description.is_empty(), "{}", item.label);
            }
            for item in copy.stats.iter().chain(copy.steps).chain(copy.transformation_cards) {
                assert!(!item.description.is_empty(), "{}", item.label);
            }
        }
    }

    #[test]
    fn nav_links_point_at_page_anchors() {
        for link in NAV_LINKS {
            assert!(link.anchor.starts_with('#'));
        }
    }
}
