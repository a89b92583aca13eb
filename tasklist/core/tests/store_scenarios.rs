use insta::assert_yaml_snapshot;
use std::cell::RefCell;
use std::rc::Rc;
use tasklist_core::{Action, Filter, Store, Task, visible_tasks};

fn setup() -> Store {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Store::new()
}

fn dispatch_json(store: &Store, json: &str) {
    let action = Action::from_json(json).expect("Failed to decode action");
    store.dispatch(action);
}

#[test]
fn toggled_task_disappears_from_not_done_view() {
    let store = setup();

    dispatch_json(
        &store,
        r#"{"type":"ADD_TASK","payload":{"id":1,"description":"buy milk","isDone":false}}"#,
    );
    assert_eq!(store.state().tasks, vec![Task::new(1, "buy milk", false)]);

    dispatch_json(&store, r#"{"type":"TOGGLE_TASK","payload":1}"#);
    assert_eq!(store.state().tasks, vec![Task::new(1, "buy milk", true)]);

    dispatch_json(&store, r#"{"type":"SET_FILTER","payload":"NOT_DONE"}"#);
    let state = store.state();

    assert_eq!(state.filter, Filter::NotDone);
    assert!(visible_tasks(&state.tasks, state.filter).is_empty());
    assert_yaml_snapshot!("toggled_then_filtered", state.as_ref());
}

#[test]
fn edit_after_count_based_adds() {
    let store = setup();

    let first = store.add_task("a");
    let second = store.add_task("b");
    assert_eq!((first, second), (1, 2));

    store.dispatch(Action::edit_task(1, "a2"));
    let state = store.state();

    assert_eq!(
        state.tasks,
        vec![Task::new(1, "a2", false), Task::new(2, "b", false)]
    );
    assert_yaml_snapshot!("edited_after_adds", state.as_ref());
}

#[test]
fn unknown_actions_from_the_wire_leave_state_untouched() {
    let store = setup();
    store.add_task("a");
    let before = store.state();

    dispatch_json(&store, r#"{"type":"DELETE_TASK","payload":1}"#);
    dispatch_json(&store, r#"{"type":"SET_FILTER","payload":"SOMETIMES"}"#);

    assert!(Rc::ptr_eq(&before, &store.state()));
}

#[test]
fn view_rerenders_on_every_dispatch() {
    let store = setup();
    let rendered: Rc<RefCell<Vec<Vec<u32>>>> = Rc::new(RefCell::new(Vec::new()));
    let renders = Rc::clone(&rendered);
    let subscription = store.subscribe(move |state| {
        let ids = state.visible_tasks().iter().map(|task| task.id).collect();
        renders.borrow_mut().push(ids);
    });

    store.add_task("a");
    store.add_task("b");
    store.dispatch(Action::toggle_task(2));
    store.dispatch(Action::set_filter(Filter::Done));
    subscription.unsubscribe();
    store.dispatch(Action::set_filter(Filter::All));

    assert_eq!(
        *rendered.borrow(),
        vec![vec![1], vec![1, 2], vec![1, 2], vec![2]]
    );
}

#[test]
fn filter_never_changes_stored_tasks() {
    let store = setup();
    store.add_task("a");
    store.add_task("b");
    store.dispatch(Action::toggle_task(1));
    let tasks_before = store.state().tasks.clone();

    for filter in Filter::ALL_FILTERS {
        store.dispatch(Action::set_filter(filter));
        assert_eq!(store.state().tasks, tasks_before);
    }
}
