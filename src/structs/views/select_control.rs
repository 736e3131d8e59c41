use crate::config::constants::{MENTOR_ERROR_OPTION, NO_MENTORS_OPTION};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            disabled: false,
        }
    }

    pub fn disabled(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            disabled: true,
        }
    }
}

/// A mentor drop-down. The first option is always the placeholder with an
/// empty value; an empty `value` means nothing is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectControl {
    pub placeholder: String,
    pub options: Vec<SelectOption>,
    pub value: String,
}

impl SelectControl {
    pub fn new(placeholder: &str) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            options: vec![SelectOption::new("", placeholder)],
            value: String::new(),
        }
    }

    /// Replaces the option list with `mentors`, keeping the current selection
    /// if it is still offered.
    pub fn repopulate(&mut self, mentors: &[String]) {
        let current = std::mem::take(&mut self.value);

        self.options = vec![SelectOption::new("", &self.placeholder)];
        if mentors.is_empty() {
            self.options.push(SelectOption::disabled(NO_MENTORS_OPTION));
        } else {
            self.options.extend(mentors.iter().map(|mentor| SelectOption::new(mentor, mentor)));
        }

        if !current.is_empty() {
            self.select(&current);
        }
    }

    pub fn show_error(&mut self) {
        self.options = vec![SelectOption::new("", MENTOR_ERROR_OPTION)];
        self.value.clear();
    }

    /// Selects `value` if an enabled option carries it. Returns whether the
    /// selection changed to `value`.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|option| !option.disabled && option.value == value) {
            self.value = value.to_string();
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn selected(&self) -> Option<&str> {
        Some(self.value.as_str()).filter(|value| !value.is_empty())
    }

    pub fn mentors(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|option| !option.disabled && !option.value.is_empty())
            .map(|option| option.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn placeholder_stays_first() {
        let mut control = SelectControl::new("All Mentors");
        control.repopulate(&names(&["Bob", "Carol"]));

        assert_eq!(control.options[0], SelectOption::new("", "All Mentors"));
        assert_eq!(control.mentors().collect::<Vec<_>>(), vec!["Bob", "Carol"]);
    }

    #[test]
    fn empty_list_adds_disabled_notice() {
        let mut control = SelectControl::new("Select a mentor");
        control.repopulate(&[]);

        assert_eq!(control.options.len(), 2);
        assert!(control.options[1].disabled);
        assert_eq!(control.options[1].label, "No mentors available");
        assert!(!control.select(""));
    }

    #[test]
    fn selection_survives_when_still_offered() {
        let mut control = SelectControl::new("All Mentors");
        control.repopulate(&names(&["Bob", "Carol"]));
        assert!(control.select("Carol"));

        control.repopulate(&names(&["Alice", "Carol"]));
        assert_eq!(control.selected(), Some("Carol"));

        control.repopulate(&names(&["Alice"]));
        assert_eq!(control.selected(), None);
    }

    #[test]
    fn error_replaces_options() {
        let mut control = SelectControl::new("Select a mentor");
        control.repopulate(&names(&["Bob"]));
        control.select("Bob");

        control.show_error();

        assert_eq!(control.options, vec![SelectOption::new("", "Error loading mentors")]);
        assert_eq!(control.selected(), None);
    }

    proptest! {
        #[test]
        fn repopulate_preserves_selection_iff_present(
            before in proptest::collection::vec("[A-Za-z]{1,6}", 1..6),
            after in proptest::collection::vec("[A-Za-z]{1,6}", 0..6),
            pick in 0usize..6,
        ) {
            let mut control = SelectControl::new("All Mentors");
            control.repopulate(&before);
            let chosen = before[pick % before.len()].clone();
            prop_assert!(control.select(&chosen));

            control.repopulate(&after);

            if after.contains(&chosen) {
                prop_assert_eq!(control.selected(), Some(chosen.as_str()));
            } else {
                prop_assert_eq!(control.selected(), None);
            }
        }
    }
}
