//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use patternize::io::progress::ProgressManager;
    use std::path::Path;
    use std::time::Duration;

    #[test]
    fn test_uninitialized_manager_is_inert() {
        let manager = ProgressManager::new();
        manager.start_file(Path::new("tile.png"));
        manager.complete_file(Duration::from_millis(1));
        manager.finish();
        assert_eq!(manager.length(), None);
        assert_eq!(manager.position(), 0);
    }

    // Tests the bar advances once per completed preview
    // Verified by skipping the increment
    #[test]
    fn test_bar_tracks_completed_files() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);
        assert_eq!(manager.length(), Some(3));

        manager.start_file(Path::new("a.png"));
        manager.complete_file(Duration::from_millis(2));
        manager.start_file(Path::new("b.png"));
        manager.complete_file(Duration::from_millis(2));

        assert_eq!(manager.position(), 2);
        manager.finish();
    }
}
