use rerender_lab::demo::counter::{ComputedValue, CounterDemo};
use rerender_lab::demo::{RenderKind, RenderLog};
use rerender_lab::ui::counter::CounterIntent;

#[test]
fn toggle_does_not_touch_counter() {
    let mut demo = CounterDemo::new(RenderLog::default());
    demo.dispatch(CounterIntent::Increment);
    demo.dispatch(CounterIntent::Increment);
    demo.dispatch(CounterIntent::Toggle);
    assert_eq!(demo.state().count, 2);
    assert!(demo.state().toggled);
    assert_eq!(demo.computed(), ComputedValue(4));
}

#[test]
fn increment_does_not_touch_toggle() {
    let mut demo = CounterDemo::new(RenderLog::default());
    demo.dispatch(CounterIntent::Toggle);
    demo.dispatch(CounterIntent::Increment);
    assert!(demo.state().toggled);
    demo.dispatch(CounterIntent::Toggle);
    demo.dispatch(CounterIntent::Increment);
    assert!(!demo.state().toggled);
    assert_eq!(demo.state().count, 2);
}

#[test]
fn child_recomputes_on_every_parent_change() {
    let log = RenderLog::default();
    let mut demo = CounterDemo::new(log.clone());
    let intents = [
        CounterIntent::Increment,
        CounterIntent::Toggle,
        CounterIntent::Toggle,
        CounterIntent::Increment,
    ];
    for intent in intents {
        assert!(demo.dispatch(intent));
    }
    assert_eq!(log.count(RenderKind::ExpensiveComputation), 5);

    let details: Vec<String> = log.events().into_iter().map(|e| e.detail).collect();
    assert_eq!(
        details,
        vec![
            "count=0 value=0",
            "count=1 value=2",
            "count=1 value=2",
            "count=1 value=2",
            "count=2 value=4",
        ]
    );
}
