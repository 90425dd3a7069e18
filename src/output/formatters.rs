//! Formatting utilities for terminal output

/// Format the letter pool with 1-based slot numbers
///
/// Selected slots show `·` in place of their letter.
#[must_use]
pub fn format_pool(letters: &[char], selected: &[usize]) -> String {
    letters
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            let shown = if selected.contains(&i) { '·' } else { letter };
            format!("{}:{shown}", i + 1)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format the answer as letter boxes, padded with `_` up to the solution length
///
/// Answers longer than the solution are shown in full.
#[must_use]
pub fn format_slots(answer: &str, solution_len: usize) -> String {
    let mut slots: Vec<char> = answer.chars().collect();
    if slots.len() < solution_len {
        slots.resize(solution_len, '_');
    }
    slots
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(done: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (done * width / total).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Hint budget as filled and empty bulbs
#[must_use]
pub fn hint_meter(used: u32, max: u32) -> String {
    (0..max)
        .map(|i| if i < used { '●' } else { '○' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_marks_selected_slots() {
        let text = format_pool(&['S', 'U', 'N'], &[1]);
        assert_eq!(text, "1:S  2:·  3:N");
    }

    #[test]
    fn slots_pad_to_solution_length() {
        assert_eq!(format_slots("SU", 4), "S U _ _");
        assert_eq!(format_slots("", 3), "_ _ _");
    }

    #[test]
    fn slots_show_overlong_answers() {
        assert_eq!(format_slots("SUNNY", 3), "S U N N Y");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(3, 6, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_total() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn hint_meter_counts_used() {
        assert_eq!(hint_meter(1, 3), "●○○");
        assert_eq!(hint_meter(3, 3), "●●●");
    }
}
