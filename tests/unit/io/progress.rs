//! Tests for the progress bar wrapper

#[cfg(test)]
mod tests {
    use birdwalk::io::progress::ProgressManager;

    #[test]
    fn test_advancing_without_a_bar_is_safe() {
        let manager = ProgressManager::new();
        manager.advance();
        manager.finish();
    }

    #[test]
    fn test_full_cycle_does_not_panic() {
        let mut manager = ProgressManager::default();
        manager.start(10, "Drawing");
        for _ in 0..10 {
            manager.advance();
        }
        manager.finish();
    }
}
