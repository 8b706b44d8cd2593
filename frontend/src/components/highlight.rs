use yew::prelude::*;

use crate::components::icons::IconGlyph;
use crate::content::Highlight;

/// How a block in a [`HighlightList`] is numbered, if at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Numbering {
    #[default]
    None,
    /// Zero-padded step badge: `01`, `02`, ...
    Step,
    /// Plain ordinal badge: `1`, `2`, ...
    Ordinal,
}

impl Numbering {
    pub fn badge(self, index: usize) -> Option<String> {
        match self {
            Numbering::None => None,
            Numbering::Step => Some(format!("{:02}", index + 1)),
            Numbering::Ordinal => Some((index + 1).to_string()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HighlightListProps {
    pub items: &'static [Highlight],
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
    #[prop_or_default]
    pub numbering: Numbering,
    #[prop_or(true)]
    pub show_icon: bool,
}

/// Renders one block per highlight, in array order.
#[function_component(HighlightList)]
pub fn highlight_list(props: &HighlightListProps) -> Html {
    let HighlightListProps {
        items,
        class,
        item_class,
        numbering,
        show_icon,
    } = props;

    html! {
        <div class={classes!("highlight-list", class.clone())}>
            { for items.iter().enumerate().map(|(index, item)| html! {
                <div class={classes!("highlight", item_class.clone())}>
                    {
                        if *show_icon {
                            html! {
                                <span class="highlight-icon">
                                    <IconGlyph icon={item.icon} />
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        match numbering.badge(index) {
                            Some(badge) => html! { <span class="highlight-badge">{badge}</span> },
                            None => html! {},
                        }
                    }
                    <div class="highlight-body">
                        <h3 class="highlight-label">{item.label}</h3>
                        {
                            if item.description.is_empty() {
                                html! {}
                            } else {
                                html! { <p class="highlight-description">{item.description}</p> }
                            }
                        }
                    </div>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_badges_are_zero_padded() {
        let badges: Vec<_> = (0..3).filter_map(|i| Numbering::Step.badge(i)).collect();
        assert_eq!(badges, vec!["01", "02", "03"]);
    }

    #[test]
    fn ordinal_badges_start_at_one() {
        assert_eq!(Numbering::Ordinal.badge(0).as_deref(), Some("1"));
        assert_eq!(Numbering::Ordinal.badge(3).as_deref(), Some("4"));
        assert_eq!(Numbering::None.badge(0), None);
    }
}
