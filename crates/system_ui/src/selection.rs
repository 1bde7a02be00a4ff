#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Current member of a closed set of selectable values, such as the visible tab.
///
/// `T` is expected to be an enum, so a selection outside the set cannot be
/// expressed. The value only changes through [`Selection::select`].
pub struct Selection<T> {
    current: T,
}

impl<T: Copy + PartialEq> Selection<T> {
    /// Starts at `initial`.
    pub const fn new(initial: T) -> Self {
        Self { current: initial }
    }

    /// Currently selected member.
    pub fn current(&self) -> T {
        self.current
    }

    /// Whether `value` is the current member.
    pub fn is_selected(&self, value: T) -> bool {
        self.current == value
    }

    /// Replaces the current member. Returns whether it changed.
    pub fn select(&mut self, value: T) -> bool {
        if self.current == value {
            return false;
        }
        self.current = value;
        true
    }
}

impl<T: Copy + PartialEq + Default> Default for Selection<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    enum Pane {
        #[default]
        Left,
        Right,
    }

    #[test]
    fn select_replaces_current_and_reports_change() {
        let mut selection = Selection::new(Pane::Left);
        assert!(selection.select(Pane::Right));
        assert_eq!(selection.current(), Pane::Right);
        assert!(selection.is_selected(Pane::Right));
        assert!(!selection.is_selected(Pane::Left));
    }

    #[test]
    fn reselecting_current_is_a_noop() {
        let mut selection = Selection::<Pane>::default();
        assert!(!selection.select(Pane::Left));
        assert_eq!(selection, Selection::new(Pane::Left));
    }
}
