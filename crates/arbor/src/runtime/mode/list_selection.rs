//! Wrap-around index helpers shared by list-style modes.

/// Returns selected index clamped into `[0, item_count - 1]`.
pub(crate) fn clamp(selected_index: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }

    selected_index.min(item_count - 1)
}

/// Increments selected index with wrap-around.
pub(crate) fn increment(selected_index: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }

    (selected_index + 1) % item_count
}

/// Decrements selected index with wrap-around.
pub(crate) fn decrement(selected_index: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }

    if selected_index == 0 {
        return item_count - 1;
    }

    selected_index - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_wraps_to_first_item() {
        // Arrange
        let selected_index = 2;

        // Act
        let next_index = increment(selected_index, 3);

        // Assert
        assert_eq!(next_index, 0);
    }

    #[test]
    fn test_decrement_wraps_to_last_item() {
        // Arrange
        let selected_index = 0;

        // Act
        let previous_index = decrement(selected_index, 3);

        // Assert
        assert_eq!(previous_index, 2);
    }

    #[test]
    fn test_helpers_return_zero_for_empty_list() {
        // Arrange & Act
        let indexes = [clamp(4, 0), increment(4, 0), decrement(4, 0)];

        // Assert
        assert_eq!(indexes, [0, 0, 0]);
    }

    #[test]
    fn test_clamp_limits_index_to_last_item() {
        // Arrange
        let selected_index = 9;

        // Act
        let clamped_index = clamp(selected_index, 2);

        // Assert
        assert_eq!(clamped_index, 1);
    }
}
