use crate::model::Entry;

/// Which side(s) of an entry are shown.
///
/// Built from the `--no-native` / `--no-foreign` flags. When both are set,
/// hiding the native term wins and only the foreign term is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPolicy {
    #[default]
    Both,
    NativeOnly,
    ForeignOnly,
}

impl DisplayPolicy {
    pub fn from_flags(no_native: bool, no_foreign: bool) -> Self {
        if no_native {
            DisplayPolicy::ForeignOnly
        } else if no_foreign {
            DisplayPolicy::NativeOnly
        } else {
            DisplayPolicy::Both
        }
    }

    pub fn render(&self, entry: &Entry) -> String {
        match self {
            DisplayPolicy::Both => format!("{} - {}", entry.native, entry.foreign),
            DisplayPolicy::NativeOnly => entry.native.clone(),
            DisplayPolicy::ForeignOnly => entry.foreign.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_policy() {
        let entry = Entry::new("Zwei", "Due");
        assert_eq!(DisplayPolicy::Both.render(&entry), "Zwei - Due");
        assert_eq!(DisplayPolicy::NativeOnly.render(&entry), "Zwei");
        assert_eq!(DisplayPolicy::ForeignOnly.render(&entry), "Due");
    }

    #[test]
    fn flags_map_to_policies() {
        assert_eq!(DisplayPolicy::from_flags(false, false), DisplayPolicy::Both);
        assert_eq!(DisplayPolicy::from_flags(true, false), DisplayPolicy::ForeignOnly);
        assert_eq!(DisplayPolicy::from_flags(false, true), DisplayPolicy::NativeOnly);
    }

    #[test]
    fn native_suppression_takes_precedence() {
        assert_eq!(DisplayPolicy::from_flags(true, true), DisplayPolicy::ForeignOnly);
    }
}
