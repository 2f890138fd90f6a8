use std::fmt;

/// Which derived series to plot: one event row, or the column-wise mean.
/// Ephemeral; a fresh submission resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Event(usize),
    Mean,
}

impl Selection {
    /// Pick-list options for a record with `events` rows, events first.
    pub fn options(events: usize) -> Vec<Selection> {
        let mut options: Vec<Selection> = (0..events).map(Selection::Event).collect();
        options.push(Selection::Mean);
        options
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Event(index) => write!(f, "Event {}", index),
            Selection::Mean => write!(f, "Mean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_list_events_then_mean() {
        let options = Selection::options(3);
        assert_eq!(
            options,
            vec![
                Selection::Event(0),
                Selection::Event(1),
                Selection::Event(2),
                Selection::Mean
            ]
        );
    }

    #[test]
    fn labels_match_the_pick_list() {
        assert_eq!(Selection::Event(1).to_string(), "Event 1");
        assert_eq!(Selection::Mean.to_string(), "Mean");
    }
}
