use chrono::Datelike;
use yew::prelude::*;

use crate::components::button::{ButtonKind, CtaButton};
use crate::components::faq_item::FaqItem;
use crate::components::highlight::{HighlightList, Numbering};
use crate::components::icons::IconGlyph;
use crate::components::section_title::SectionTitle;
use crate::config;
use crate::content::{Icon, PageCopy, ALTERNATE, PRIMARY};
use crate::scroll::use_scroll_threshold;

/// The two shipped copies of the page. They share every component and differ only
/// in copy text and accent styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Alternate,
}

impl Variant {
    pub fn copy(self) -> &'static PageCopy {
        match self {
            Variant::Primary => &PRIMARY,
            Variant::Alternate => &ALTERNATE,
        }
    }

    pub fn theme_class(self) -> &'static str {
        match self {
            Variant::Primary => "variant-primary",
            Variant::Alternate => "variant-alternate",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub variant: Variant,
}

#[function_component(Brand)]
fn brand() -> Html {
    html! {
        <div class="brand">
            <div class="brand-mark">{"S"}</div>
            <span class="brand-name">
                {config::BRAND_NAME}{" "}<span class="accent">{config::BRAND_ACCENT}</span>
            </span>
        </div>
    }
}

#[function_component(Navbar)]
fn navbar(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <nav class="top-nav">
            <div class="container nav-content">
                <Brand />
                <div class="nav-links">
                    { for copy.nav_links.iter().map(|link| html! {
                        <a href={link.anchor} class="nav-link">{link.label}</a>
                    }) }
                </div>
                <CtaButton class={classes!("nav-cta")}>{copy.nav_cta}</CtaButton>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section class="hero">
            <div class="container hero-content">
                <div class="hero-badge">
                    <IconGlyph icon={Icon::Zap} />
                    <span>{copy.hero_badge}</span>
                </div>
                <h1>
                    {copy.hero_title}<br />
                    <span class="accent">{copy.hero_title_accent}</span>
                </h1>
                <p class="hero-subtitle">
                    {copy.hero_subtitle}{" "}
                    <span class="product-name">{copy.hero_subtitle_product}</span>
                </p>

                <HighlightList items={copy.hero_points} class={classes!("hero-points")} item_class={classes!("hero-point")} />

                <div class="hero-actions">
                    <CtaButton class={classes!("with-arrow")}>
                        <span>{copy.hero_primary_cta}</span>
                        <IconGlyph icon={Icon::ArrowLeft} />
                    </CtaButton>
                    <CtaButton kind={ButtonKind::Outline}>
                        <IconGlyph icon={Icon::PlayCircle} class={classes!("accent")} />
                        <span>{copy.hero_secondary_cta}</span>
                    </CtaButton>
                </div>

                <div class="hero-preview">
                    <div class="hero-glow"></div>
                    <img src={copy.hero_image} alt="Dashboard Preview" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Problem)]
fn problem(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section id="problem" class="problem dark">
            <div class="container">
                <SectionTitle title={copy.problem_title} subtitle={Some(AttrValue::from(copy.problem_subtitle))} />
                <div class="two-columns">
                    <div>
                        <p class="problem-quote">{copy.problem_quote}</p>
                        <HighlightList items={copy.problem_points} class={classes!("problem-points")} item_class={classes!("problem-point")} />
                    </div>
                    <div class="problem-visual">
                        <img src={copy.problem_image} alt="Stressed Staff" />
                        <div class="problem-badge">{copy.problem_badge}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Transformation)]
fn transformation(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section class="transformation">
            <div class="container">
                <div class="transformation-panel">
                    <h2>
                        {copy.transformation_title}<br class="desktop-only" />
                        {copy.transformation_title_tail}
                    </h2>
                    <HighlightList
                        items={copy.transformation_cards}
                        class={classes!("card-grid")}
                        item_class={classes!("glass-card")}
                        show_icon={false}
                    />
                    <div class="transformation-closing">{copy.transformation_closing}</div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Solution)]
fn solution(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section id="solution" class="solution muted">
            <div class="container">
                <SectionTitle title={copy.solution_title} subtitle={Some(AttrValue::from(copy.solution_subtitle))} />
                <div class="two-columns">
                    <div class="offer-card workshop">
                        <div class="offer-icon"><IconGlyph icon={Icon::Users} /></div>
                        <h3>{copy.workshop_heading}</h3>
                        <HighlightList items={copy.workshop_points} class={classes!("offer-points")} />
                    </div>
                    <div class="offer-card system">
                        <div class="offer-icon"><IconGlyph icon={Icon::Zap} /></div>
                        <h3>{copy.system_heading}</h3>
                        <HighlightList items={copy.system_points} class={classes!("offer-points")} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <SectionTitle title={copy.steps_title} />
                <HighlightList
                    items={copy.steps}
                    class={classes!("steps")}
                    item_class={classes!("step")}
                    numbering={Numbering::Step}
                />
            </div>
        </section>
    }
}

#[function_component(BenefitSplit)]
fn benefit_split(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section class="benefits muted">
            <div class="container">
                <div class="benefit-split">
                    <div class="benefit-column patient">
                        <h3><IconGlyph icon={Icon::Users} /><span>{copy.patient_heading}</span></h3>
                        <HighlightList items={copy.patient_benefits} class={classes!("benefit-list")} />
                    </div>
                    <div class="benefit-column clinic">
                        <h3><IconGlyph icon={Icon::TrendingUp} /><span>{copy.clinic_heading}</span></h3>
                        <HighlightList items={copy.clinic_benefits} class={classes!("benefit-list")} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ProofOfValue)]
fn proof_of_value(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section class="proof">
            <div class="container">
                <SectionTitle title={copy.proof_title} subtitle={Some(AttrValue::from(copy.proof_subtitle))} />
                <HighlightList items={copy.stats} class={classes!("stats")} item_class={classes!("stat-card")} />
            </div>
        </section>
    }
}

#[function_component(Pricing)]
fn pricing(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section id="pricing" class="pricing muted">
            <div class="container">
                <SectionTitle title={copy.pricing_title} />
                <div class="pricing-card">
                    <div class="pricing-tagline">{copy.pricing_tagline}</div>
                    <div class="price-lines">
                        { for copy.price_lines.iter().map(|line| html! {
                            <div class="price-line">
                                <span class="price-item">{line.item}</span>
                                <span class="price-cost">{line.cost}</span>
                            </div>
                        }) }
                        <div class="price-total">
                            <div class="price-total-amount">{copy.pricing_total}</div>
                            <p>{copy.pricing_note}</p>
                        </div>
                    </div>
                    <CtaButton class={classes!("full-width")}>{copy.pricing_cta}</CtaButton>
                </div>
            </div>
        </section>
    }
}

#[function_component(WhoIsItFor)]
fn who_is_it_for(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section class="audience">
            <div class="container">
                <SectionTitle title={copy.audience_title} />
                <HighlightList
                    items={copy.audience}
                    class={classes!("audience-grid")}
                    item_class={classes!("audience-card")}
                    numbering={Numbering::Ordinal}
                    show_icon={false}
                />
            </div>
        </section>
    }
}

#[function_component(FaqSection)]
fn faq_section(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section class="faq muted">
            <div class="container narrow">
                <SectionTitle title={copy.faq_title} />
                <div class="faq-list">
                    { for copy.faqs.iter().map(|entry| html! {
                        <FaqItem question={entry.question} answer={entry.answer} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta(props: &SectionProps) -> Html {
    let copy = props.variant.copy();

    html! {
        <section class="final-cta">
            <div class="container">
                <h2>{copy.final_title}<br />{copy.final_title_tail}</h2>
                <p>{copy.final_subtitle}</p>
                <div class="final-actions">
                    <CtaButton kind={ButtonKind::Secondary} class={classes!("large")}>{copy.final_primary_cta}</CtaButton>
                    <CtaButton kind={ButtonKind::Outline} class={classes!("large", "on-accent")}>{copy.final_secondary_cta}</CtaButton>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let copy = props.variant.copy();
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <Brand />
                <p class="footer-tagline">{copy.footer_tagline}</p>
                <div class="footer-icons">
                    { for copy.footer_icons.iter().map(|icon| html! { <IconGlyph icon={*icon} /> }) }
                </div>
                <div class="footer-rights">
                    {format!("{} {} {} {}", copy.footer_rights, year, config::BRAND_NAME, config::BRAND_ACCENT)}
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct StickyCtaProps {
    label: AttrValue,
    visible: bool,
}

#[function_component(StickyCta)]
fn sticky_cta(props: &StickyCtaProps) -> Html {
    html! {
        <div class={classes!("sticky-cta", props.visible.then(|| "visible"))}>
            <CtaButton class={classes!("full-width")}>{&props.label}</CtaButton>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let variant = props.variant;
    let copy = variant.copy();
    let show_sticky_cta = use_scroll_threshold(config::STICKY_CTA_THRESHOLD);

    use_effect_with_deps(
        move |variant| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                document.set_title(variant.copy().document_title);
            }
            || ()
        },
        variant,
    );

    html! {
        <div class={classes!("landing-page", variant.theme_class())}>
            <Navbar variant={variant} />
            <Hero variant={variant} />
            <Problem variant={variant} />
            <Transformation variant={variant} />
            <Solution variant={variant} />
            <HowItWorks variant={variant} />
            <BenefitSplit variant={variant} />
            <ProofOfValue variant={variant} />
            <Pricing variant={variant} />
            <WhoIsItFor variant={variant} />
            <FaqSection variant={variant} />
            <FinalCta variant={variant} />
            <Footer variant={variant} />

            // Small viewports only, see the media query below
            <StickyCta label={copy.sticky_cta} visible={show_sticky_cta} />

            <style>
                {r#"
                .landing-page {
                    --accent: #2563eb;
                    --accent-strong: #1d4ed8;
                    --accent-soft: #dbeafe;
                    --positive: #10b981;
                    --radius: 1.5rem;
                    min-height: 100vh;
                    background: #f8fafc;
                    color: #0f172a;
                    font-family: 'Cairo', 'Tajawal', system-ui, sans-serif;
                    direction: rtl;
                }

                .landing-page.variant-alternate {
                    --accent: #0d9488;
                    --accent-strong: #0f766e;
                    --accent-soft: #ccfbf1;
                    --positive: #2563eb;
                    --radius: 0.75rem;
                }

                .landing-page ::selection {
                    background: var(--accent-soft);
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .container.narrow {
                    max-width: 900px;
                }

                .accent {
                    color: var(--accent);
                }

                .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    flex-shrink: 0;
                }

                section {
                    padding: 6rem 0;
                }

                section.muted {
                    background: #f8fafc;
                }

                section.dark {
                    background: #0f172a;
                    color: #fff;
                }

                .section-title {
                    margin-bottom: 3rem;
                }

                .section-title.centered {
                    text-align: center;
                }

                .section-title.start {
                    text-align: start;
                }

                .section-title h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .section-subtitle {
                    font-size: 1.125rem;
                    color: #475569;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .dark .section-subtitle {
                    color: #cbd5e1;
                }

                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: var(--radius);
                    font-weight: 700;
                    font-size: 1.125rem;
                    cursor: pointer;
                    border: 2px solid transparent;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s ease;
                }

                .btn:active {
                    transform: scale(0.95);
                }

                .btn-primary {
                    background: var(--accent);
                    color: #fff;
                }

                .btn-primary:hover {
                    background: var(--accent-strong);
                }

                .btn-secondary {
                    background: var(--positive);
                    color: #fff;
                }

                .btn-outline {
                    background: #fff;
                    color: #334155;
                    border-color: #e2e8f0;
                }

                .btn-outline:hover {
                    border-color: var(--accent);
                    color: var(--accent);
                }

                .btn-outline.on-accent {
                    background: transparent;
                    color: #fff;
                    border-color: #fff;
                }

                .btn.large {
                    padding: 1.25rem 3rem;
                    font-size: 1.25rem;
                }

                .btn.full-width {
                    width: 100%;
                }

                .with-arrow:hover .icon-arrow-left {
                    transform: translateX(-0.25rem);
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #e2e8f0;
                }

                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 0.75rem;
                    padding-bottom: 0.75rem;
                }

                .nav-links {
                    display: none;
                    gap: 2rem;
                    font-weight: 600;
                }

                .nav-link {
                    color: #475569;
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: var(--accent);
                }

                .nav-cta.btn {
                    padding: 0.5rem 1.25rem;
                    font-size: 0.875rem;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .brand-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    background: var(--accent);
                    color: #fff;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 900;
                    font-size: 1.25rem;
                }

                .brand-name {
                    font-size: 1.25rem;
                    font-weight: 900;
                }

                .hero {
                    padding-top: 8rem;
                    padding-bottom: 5rem;
                    overflow: hidden;
                    background: radial-gradient(at 0% 0%, var(--accent-soft) 0, transparent 50%),
                        radial-gradient(at 100% 100%, #d1fae5 0, transparent 50%);
                }

                .hero-content {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: var(--accent-soft);
                    color: var(--accent-strong);
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 0.875rem;
                    margin-bottom: 2rem;
                }

                .hero-badge .icon {
                    width: 1rem;
                    height: 1rem;
                }

                .hero h1 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    line-height: 1.25;
                    margin-bottom: 1.5rem;
                    max-width: 56rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #475569;
                    line-height: 1.75;
                    max-width: 48rem;
                    margin-bottom: 2rem;
                }

                .product-name {
                    font-weight: 700;
                    color: #0f172a;
                    text-decoration: underline;
                    text-decoration-color: var(--accent);
                }

                .highlight {
                    display: flex;
                    gap: 0.75rem;
                    align-items: flex-start;
                }

                .highlight-label {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin: 0;
                }

                .highlight-description {
                    color: #475569;
                    margin: 0.25rem 0 0;
                }

                .hero-points {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                    width: 100%;
                    max-width: 64rem;
                    margin-bottom: 3rem;
                }

                .hero-point {
                    background: rgba(255, 255, 255, 0.5);
                    border: 1px solid #e2e8f0;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    align-items: center;
                }

                .hero-point .highlight-label {
                    font-size: 0.875rem;
                    color: #334155;
                }

                .hero-point .icon,
                .offer-card.system .icon,
                .clinic .highlight .icon {
                    color: var(--positive);
                }

                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    width: 100%;
                    justify-content: center;
                }

                .hero-preview {
                    position: relative;
                    margin-top: 4rem;
                    width: 100%;
                    max-width: 64rem;
                }

                .hero-glow {
                    position: absolute;
                    inset: 0;
                    background: var(--accent-soft);
                    filter: blur(64px);
                    border-radius: 9999px;
                    opacity: 0.5;
                }

                .hero-preview img {
                    position: relative;
                    width: 100%;
                    border-radius: 1rem;
                    border: 1px solid #e2e8f0;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .two-columns {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .problem-quote {
                    font-size: 1.25rem;
                    color: #cbd5e1;
                    font-style: italic;
                    line-height: 1.75;
                    border-right: 4px solid var(--accent);
                    padding-right: 1.5rem;
                }

                .problem-points {
                    display: grid;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .problem-point {
                    background: #1e293b;
                    padding: 1rem;
                    border-radius: 0.75rem;
                }

                .problem-point .icon {
                    color: #ef4444;
                }

                .problem-visual {
                    position: relative;
                }

                .problem-visual img {
                    width: 100%;
                    border-radius: 1.5rem;
                    filter: grayscale(1);
                    opacity: 0.6;
                }

                .problem-badge {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%) rotate(12deg);
                    background: #ef4444;
                    color: #fff;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 1.25rem;
                }

                .transformation {
                    background: #fff;
                }

                .transformation-panel {
                    position: relative;
                    overflow: hidden;
                    background: var(--accent);
                    color: #fff;
                    text-align: center;
                    border-radius: 3rem;
                    padding: 3rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .transformation-panel h2 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin-bottom: 2rem;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .glass-card {
                    flex-direction: column;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(12px);
                    padding: 1.5rem;
                    border-radius: 1rem;
                }

                .glass-card .highlight-label {
                    font-size: 1.5rem;
                }

                .glass-card .highlight-description {
                    color: rgba(255, 255, 255, 0.8);
                }

                .transformation-closing {
                    margin-top: 3rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .offer-card {
                    background: #fff;
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    border: 1px solid var(--accent-soft);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    transition: border-color 0.3s ease;
                    align-self: stretch;
                }

                .offer-card:hover {
                    border-color: var(--accent);
                }

                .offer-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    background: var(--accent-soft);
                    color: var(--accent);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                }

                .offer-card h3 {
                    font-size: 1.5rem;
                    font-weight: 900;
                    margin-bottom: 1.5rem;
                }

                .offer-points {
                    display: grid;
                    gap: 1rem;
                }

                .offer-card.workshop .offer-points .icon {
                    color: var(--accent);
                }

                .how-it-works {
                    background: #fff;
                }

                .steps {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }

                .step {
                    position: relative;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .step .highlight-icon {
                    width: 6rem;
                    height: 6rem;
                    border-radius: 9999px;
                    background: var(--accent-soft);
                    color: var(--accent);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.3s ease;
                }

                .step:hover .highlight-icon {
                    transform: scale(1.1);
                }

                .step .highlight-icon .icon {
                    width: 2.5rem;
                    height: 2.5rem;
                }

                .step .highlight-badge {
                    position: absolute;
                    top: -0.5rem;
                    margin-right: 5rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #0f172a;
                    color: #fff;
                    border: 4px solid #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 900;
                }

                .step .highlight-label {
                    font-size: 1.5rem;
                    font-weight: 900;
                    margin: 1.5rem 0 1rem;
                }

                .benefit-split {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1px;
                    background: #e2e8f0;
                    border-radius: 2rem;
                    overflow: hidden;
                    border: 1px solid #e2e8f0;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .benefit-column {
                    background: #fff;
                    padding: 3rem;
                    transition: background 0.3s ease;
                }

                .benefit-column.patient:hover {
                    background: var(--accent-soft);
                }

                .benefit-column.clinic:hover {
                    background: #ecfdf5;
                }

                .benefit-column h3 {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.875rem;
                    font-weight: 900;
                    margin-bottom: 2rem;
                }

                .benefit-column.patient h3,
                .patient .highlight .icon {
                    color: var(--accent);
                }

                .benefit-column.clinic h3 {
                    color: var(--positive);
                }

                .benefit-list {
                    display: grid;
                    gap: 1.5rem;
                }

                .benefit-list .highlight-label {
                    font-size: 1.25rem;
                }

                .proof {
                    background: #fff;
                }

                .stats {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .stat-card {
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    background: #fff;
                    border: 1px solid #f1f5f9;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s ease;
                }

                .stat-card:hover {
                    transform: translateY(-0.5rem);
                }

                .stat-card .highlight-icon {
                    color: var(--accent);
                    background: var(--accent-soft);
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                }

                .stat-card .highlight-label {
                    font-size: 2.25rem;
                    font-weight: 900;
                    direction: ltr;
                }

                .stat-card .highlight-description {
                    font-weight: 700;
                }

                .pricing-card {
                    max-width: 48rem;
                    margin: 0 auto;
                    background: #fff;
                    border-radius: 3rem;
                    padding: 3rem;
                    text-align: center;
                    border: 1px solid var(--accent-soft);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .pricing-tagline {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #334155;
                    margin-bottom: 2rem;
                }

                .price-lines {
                    display: grid;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }

                .price-line {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem;
                    background: #f8fafc;
                    border-radius: 1rem;
                }

                .price-item {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .price-cost {
                    color: var(--accent);
                    font-weight: 900;
                }

                .price-total {
                    padding: 1.5rem;
                    background: #ecfdf5;
                    border: 2px solid #a7f3d0;
                    border-radius: 1rem;
                    color: #059669;
                    font-weight: 700;
                }

                .price-total-amount {
                    color: #047857;
                    font-weight: 900;
                    font-size: 1.875rem;
                    margin-bottom: 0.5rem;
                }

                .audience {
                    background: #fff;
                }

                .audience-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                .audience-card {
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    background: #f8fafc;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid #e2e8f0;
                }

                .audience-card .highlight-badge {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: var(--accent);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    font-size: 1.25rem;
                }

                .audience-card .highlight-label {
                    font-size: 1.25rem;
                    color: #1e293b;
                }

                .faq-list {
                    background: #fff;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .faq-item {
                    border-bottom: 1px solid #e2e8f0;
                }

                .faq-item:last-child {
                    border-bottom: none;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem 0;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-align: right;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .faq-question:hover {
                    color: var(--accent);
                }

                .faq-chevron {
                    width: 1.25rem;
                    height: 1.25rem;
                    transition: transform 0.3s ease;
                }

                .faq-chevron.rotated {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease, opacity 0.3s ease, padding 0.3s ease;
                }

                .faq-answer.expanded {
                    max-height: 24rem;
                    opacity: 1;
                    padding-bottom: 1.5rem;
                }

                .faq-answer p {
                    color: #475569;
                    line-height: 1.75;
                    margin: 0;
                }

                .final-cta {
                    background: var(--accent);
                    color: #fff;
                    text-align: center;
                }

                .final-cta h2 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin-bottom: 2rem;
                }

                .final-cta p {
                    font-size: 1.5rem;
                    opacity: 0.9;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }

                .final-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    justify-content: center;
                }

                .site-footer {
                    padding: 3rem 0;
                    background: #0f172a;
                    color: #94a3b8;
                    border-top: 1px solid #1e293b;
                    text-align: center;
                }

                .site-footer .brand {
                    justify-content: center;
                    margin-bottom: 1.5rem;
                }

                .site-footer .brand-name {
                    color: #fff;
                }

                .footer-tagline {
                    margin-bottom: 2rem;
                }

                .footer-icons {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                    margin-bottom: 2rem;
                }

                .footer-rights {
                    font-size: 0.875rem;
                }

                .sticky-cta {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border-top: 1px solid #e2e8f0;
                    transform: translateY(100%);
                    box-shadow: none;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .sticky-cta.visible {
                    transform: translateY(0);
                    box-shadow: 0 -10px 25px -5px rgba(0, 0, 0, 0.15);
                }

                .desktop-only {
                    display: none;
                }

                @media (min-width: 640px) {
                    .hero-actions,
                    .final-actions {
                        flex-direction: row;
                    }
                }

                @media (min-width: 768px) {
                    .nav-links {
                        display: flex;
                    }

                    .desktop-only {
                        display: inline;
                    }

                    .hero h1 {
                        font-size: 3.75rem;
                    }

                    .hero-points,
                    .card-grid,
                    .audience-grid,
                    .two-columns,
                    .benefit-split {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .steps {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .stats {
                        grid-template-columns: repeat(4, 1fr);
                    }

                    .transformation-panel {
                        padding: 5rem;
                    }

                    .transformation-panel h2,
                    .final-cta h2 {
                        font-size: 3rem;
                    }

                    .sticky-cta {
                        display: none;
                    }
                }

                @media (min-width: 1024px) {
                    .hero-points,
                    .card-grid,
                    .audience-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub variant: Variant,
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(variant: Variant) -> String {
        yew::ServerRenderer::<Landing>::with_props(move || LandingProps { variant })
            .hydratable(false)
            .render()
            .await
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{} missing from rendered page", needle))
    }

    #[tokio::test]
    async fn faq_entries_start_collapsed() {
        let html = render(Variant::Primary).await;

        assert_eq!(html.matches("class=\"faq-item\"").count(), PRIMARY.faqs.len());
        assert_eq!(html.matches("aria-expanded=\"false\"").count(), PRIMARY.faqs.len());
        assert!(!html.contains("faq-item open"));
        assert!(!html.contains("faq-answer expanded"));
    }

    #[tokio::test]
    async fn sticky_cta_starts_hidden() {
        let html = render(Variant::Primary).await;

        assert!(html.contains("class=\"sticky-cta\""));
        assert!(!html.contains("sticky-cta visible"));
        assert!(html.contains(PRIMARY.sticky_cta));
    }

    #[tokio::test]
    async fn sections_render_in_page_order() {
        let html = render(Variant::Primary).await;

        let anchors = [
            position(&html, "class=\"top-nav\""),
            position(&html, "class=\"hero\""),
            position(&html, "id=\"problem\""),
            position(&html, "class=\"transformation\""),
            position(&html, "id=\"solution\""),
            position(&html, "id=\"how-it-works\""),
            position(&html, "class=\"benefits muted\""),
            position(&html, "class=\"proof\""),
            position(&html, "id=\"pricing\""),
            position(&html, "class=\"audience\""),
            position(&html, "class=\"faq muted\""),
            position(&html, "class=\"final-cta\""),
            position(&html, "class=\"site-footer\""),
            position(&html, "class=\"sticky-cta\""),
        ];

        assert!(anchors.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", anchors);
    }

    #[tokio::test]
    async fn highlights_keep_their_order() {
        let html = render(Variant::Primary).await;

        let points: Vec<usize> = PRIMARY
            .problem_points
            .iter()
            .map(|point| position(&html, point.label))
            .collect();
        assert!(points.windows(2).all(|pair| pair[0] < pair[1]));

        let badges = [
            position(&html, ">01<"),
            position(&html, ">02<"),
            position(&html, ">03<"),
        ];
        assert!(badges.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn footer_shows_current_year() {
        let html = render(Variant::Primary).await;
        let year = chrono::Local::now().year().to_string();

        assert!(html.contains(&format!("{} {} SmartClinic AI", PRIMARY.footer_rights, year)));
    }

    #[tokio::test]
    async fn alternate_variant_swaps_copy_and_theme() {
        let html = render(Variant::Alternate).await;

        assert!(html.contains("variant-alternate"));
        assert!(html.contains(ALTERNATE.hero_title));
        assert!(!html.contains(PRIMARY.hero_title));
        assert_eq!(html.matches("class=\"faq-item\"").count(), ALTERNATE.faqs.len());
    }
}
