use crate::fixtures::test_app::TestApp;
use linsta_models::DisplayFilter;

#[test]
fn mark_as_read_flips_only_the_target() {
    let app = TestApp::spawn("2024-06-15T12:00:00Z");
    let feed = app.seed_feed();
    let target = feed.iter().find(|e| !e.read).unwrap().id.clone();

    let updated = app.aggregator.mark_as_read(&feed, &target);

    assert_eq!(updated.len(), feed.len());
    for (before, after) in feed.iter().zip(&updated) {
        if before.id == target {
            assert!(after.read);
            assert_eq!(after.summary, before.summary);
        } else {
            assert_eq!(after, before);
        }
    }
    assert_eq!(
        app.aggregator.count_unread(&updated, None),
        app.aggregator.count_unread(&feed, None) - 1
    );
}

#[test]
fn unknown_id_is_a_no_op() {
    let app = TestApp::spawn("2024-06-15T12:00:00Z");
    let feed = app.seed_feed();
    let updated = app.aggregator.mark_as_read(&feed, "nonexistent-id");
    assert_eq!(updated, feed);
}

#[test]
fn read_state_never_goes_back() {
    let app = TestApp::spawn("2024-06-15T12:00:00Z");
    let feed = app.seed_random_feed(3, 100);

    for event in &feed {
        let updated = app.aggregator.mark_as_read(&feed, &event.id);
        for (before, after) in feed.iter().zip(&updated) {
            assert!(!before.read || after.read);
        }
    }
}

#[test]
fn marking_a_read_event_again_changes_nothing() {
    let app = TestApp::spawn("2024-06-15T12:00:00Z");
    let feed = app.seed_feed();
    let read_id = feed.iter().find(|e| e.read).unwrap().id.clone();
    assert_eq!(app.aggregator.mark_as_read(&feed, &read_id), feed);
}

#[test]
fn mark_all_as_read_is_idempotent() {
    let app = TestApp::spawn("2024-06-15T12:00:00Z");
    let feed = app.seed_random_feed(5, 80);

    let once = app.aggregator.mark_all_as_read(&feed);
    let twice = app.aggregator.mark_all_as_read(&once);

    assert_eq!(once, twice);
    assert!(once.iter().all(|e| e.read));
    assert_eq!(app.aggregator.count_unread(&once, Some(DisplayFilter::All)), 0);
    // Input snapshot is untouched.
    assert_eq!(feed.iter().filter(|e| !e.read).count(), app.aggregator.count_unread(&feed, None));
}

#[test]
fn merge_never_unreads() {
    let app = TestApp::spawn("2024-06-15T12:00:00Z");
    let on_screen = app.aggregator.mark_all_as_read(&app.seed_feed());

    // Server has not caught up yet and still reports everything unread.
    let stale: Vec<_> = on_screen
        .iter()
        .map(|e| {
            let mut e = e.clone();
            e.read = false;
            e
        })
        .collect();

    let merged = app.aggregator.merge_snapshot(&on_screen, &stale);
    assert_eq!(merged.len(), on_screen.len());
    assert!(merged.iter().all(|e| e.read));
}
