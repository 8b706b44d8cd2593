use std::rc::Rc;

use yew::Reducible;

/// Expanded/collapsed state of one FAQ entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

pub enum DisclosureAction {
    Toggle,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn panel_class(&self) -> &'static str {
        if self.open {
            "faq-answer expanded"
        } else {
            "faq-answer"
        }
    }

    pub fn indicator_class(&self) -> &'static str {
        if self.open {
            "faq-chevron rotated"
        } else {
            "faq-chevron"
        }
    }
}

impl Reducible for Disclosure {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DisclosureAction::Toggle => Rc::new(self.toggled()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(entries: &mut [Rc<Disclosure>], index: usize) {
        entries[index] = entries[index].clone().reduce(DisclosureAction::Toggle);
    }

    fn open_flags(entries: &[Rc<Disclosure>]) -> Vec<bool> {
        entries.iter().map(|entry| entry.is_open()).collect()
    }

    #[test]
    fn starts_collapsed() {
        let disclosure = Disclosure::default();
        assert!(!disclosure.is_open());
        assert_eq!(disclosure.panel_class(), "faq-answer");
        assert_eq!(disclosure.indicator_class(), "faq-chevron");
    }

    #[test]
    fn toggle_expands_and_rotates_indicator() {
        let disclosure = Disclosure::default().toggled();
        assert!(disclosure.is_open());
        assert_eq!(disclosure.panel_class(), "faq-answer expanded");
        assert_eq!(disclosure.indicator_class(), "faq-chevron rotated");
    }

    #[test]
    fn even_number_of_toggles_restores_state() {
        for start in [Disclosure::default(), Disclosure::default().toggled()] {
            let mut state = Rc::new(start);
            for _ in 0..6 {
                state = state.reduce(DisclosureAction::Toggle);
            }
            assert_eq!(*state, start);
        }
    }

    #[test]
    fn clicking_one_entry_leaves_the_others_alone() {
        let mut entries: Vec<Rc<Disclosure>> = (0..4).map(|_| Rc::new(Disclosure::default())).collect();

        click(&mut entries, 2);
        assert_eq!(open_flags(&entries), vec![false, false, true, false]);

        click(&mut entries, 2);
        assert_eq!(open_flags(&entries), vec![false, false, false, false]);
    }

    #[test]
    fn several_entries_may_be_open_at_once() {
        let mut entries: Vec<Rc<Disclosure>> = (0..4).map(|_| Rc::new(Disclosure::default())).collect();

        click(&mut entries, 0);
        click(&mut entries, 3);
        assert_eq!(open_flags(&entries), vec![true, false, false, true]);
    }
}
