//! A door that embeds a machine next to its own state.
//!
//! `Door` keeps an increment that hooks read while handling an event, so
//! setting the increment and driving the machine happen under the door's
//! own lock.

use fsm::machine::{HookRegistry, Machine, UnexpectedEventError};
use fsm::{event_enum, state_enum, Transition};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

state_enum! {
    enum DoorState {
        Opened,
        Closed,
    }
}

event_enum! {
    enum DoorEvent {
        PushOpen,
        PullShut,
    }
}

#[derive(Debug, Error)]
enum DoorError {
    #[error(transparent)]
    Unexpected(#[from] UnexpectedEventError<DoorState, DoorEvent>),

    #[error("door is jammed")]
    Jammed,
}

#[derive(Default)]
struct Counters {
    increment: AtomicUsize,
    opened: AtomicUsize,
    closed: AtomicUsize,
    slams: AtomicUsize,
    creaks: AtomicUsize,
}

struct Door {
    machine: Machine<DoorState, DoorEvent, DoorError>,
    counters: Arc<Counters>,
    occur_lock: Mutex<()>,
}

impl Door {
    fn new() -> Self {
        let counters = Arc::new(Counters::default());

        let on_open = Arc::clone(&counters);
        let on_close = Arc::clone(&counters);
        let slam = Arc::clone(&counters);
        let creak = Arc::clone(&counters);
        let hooks = HookRegistry::new()
            .on_entry(DoorState::Opened, move |_| {
                let inc = on_open.increment.load(Ordering::SeqCst);
                on_open.opened.fetch_add(inc, Ordering::SeqCst);
                Ok(())
            })
            .on_entry(DoorState::Closed, move |_| {
                let inc = on_close.increment.load(Ordering::SeqCst);
                on_close.closed.fetch_add(inc, Ordering::SeqCst);
                Ok(())
            })
            .on_exit(DoorState::Opened, move |_| {
                let inc = slam.increment.load(Ordering::SeqCst);
                slam.slams.fetch_add(inc, Ordering::SeqCst);
                Ok(())
            })
            .on_exit(DoorState::Closed, move |_| {
                let inc = creak.increment.load(Ordering::SeqCst);
                creak.creaks.fetch_add(inc, Ordering::SeqCst);
                Ok(())
            });

        let machine = Machine::with_hooks(
            DoorState::Opened,
            vec![
                Transition::new(DoorState::Opened, DoorEvent::PullShut, DoorState::Closed),
                Transition::new(DoorState::Closed, DoorEvent::PushOpen, DoorState::Opened),
            ],
            hooks,
        )
        .ignore_unexpected_events(true);

        Self {
            machine,
            counters,
            occur_lock: Mutex::new(()),
        }
    }

    fn occur(&self, event: DoorEvent, increment: usize) -> Result<(), DoorError> {
        let _guard = self.occur_lock.lock().unwrap();
        self.counters.increment.store(increment, Ordering::SeqCst);
        self.machine.occur(event)
    }

    fn opened(&self) -> usize {
        self.counters.opened.load(Ordering::SeqCst)
    }

    fn closed(&self) -> usize {
        self.counters.closed.load(Ordering::SeqCst)
    }
}

#[test]
fn door_passes_increments_through_hooks() {
    struct Expect {
        state: DoorState,
        opened: usize,
        closed: usize,
    }

    let door = Door::new();
    let steps = [
        (
            DoorEvent::PushOpen,
            Expect {
                state: DoorState::Opened,
                opened: 0,
                closed: 0,
            },
        ),
        (
            DoorEvent::PullShut,
            Expect {
                state: DoorState::Closed,
                opened: 0,
                closed: 3,
            },
        ),
        (
            DoorEvent::PullShut,
            Expect {
                state: DoorState::Closed,
                opened: 0,
                closed: 3,
            },
        ),
        (
            DoorEvent::PushOpen,
            Expect {
                state: DoorState::Opened,
                opened: 7,
                closed: 3,
            },
        ),
        (
            DoorEvent::PushOpen,
            Expect {
                state: DoorState::Opened,
                opened: 7,
                closed: 3,
            },
        ),
    ];

    for (i, (event, expect)) in steps.into_iter().enumerate() {
        door.occur(event, 1 + i * 2)
            .unwrap_or_else(|e| panic!("step {i}: {e}"));
        assert_eq!(door.machine.state(), expect.state, "step {i}");
        assert_eq!(door.opened(), expect.opened, "step {i}");
        assert_eq!(door.closed(), expect.closed, "step {i}");
    }

    assert_eq!(door.counters.slams.load(Ordering::SeqCst), 3);
    assert_eq!(door.counters.creaks.load(Ordering::SeqCst), 7);
}

#[test]
fn strict_door_reports_unexpected_event() {
    let door: Machine<DoorState, DoorEvent, DoorError> = Machine::new(
        DoorState::Opened,
        vec![
            Transition::new(DoorState::Opened, DoorEvent::PullShut, DoorState::Closed),
            Transition::new(DoorState::Closed, DoorEvent::PushOpen, DoorState::Opened),
        ],
    );

    let err = door.occur(DoorEvent::PushOpen).unwrap_err();

    match err {
        DoorError::Unexpected(UnexpectedEventError { event, state }) => {
            assert_eq!(event, DoorEvent::PushOpen);
            assert_eq!(state, DoorState::Opened);
        }
        other => panic!("expected unexpected event, got {other}"),
    }
    assert_eq!(door.state(), DoorState::Opened);
}

#[test]
fn jammed_door_stays_open_and_recovers() {
    let jammed = Arc::new(AtomicUsize::new(1));
    let flag = Arc::clone(&jammed);
    let hooks = HookRegistry::new().on_exit(DoorState::Opened, move |_| {
        if flag.load(Ordering::SeqCst) == 1 {
            Err(DoorError::Jammed)
        } else {
            Ok(())
        }
    });
    let door = Machine::with_hooks(
        DoorState::Opened,
        vec![Transition::new(
            DoorState::Opened,
            DoorEvent::PullShut,
            DoorState::Closed,
        )],
        hooks,
    );

    assert!(matches!(
        door.occur(DoorEvent::PullShut),
        Err(DoorError::Jammed)
    ));
    assert_eq!(door.state(), DoorState::Opened);

    jammed.store(0, Ordering::SeqCst);
    door.occur(DoorEvent::PullShut).unwrap();
    assert_eq!(door.state(), DoorState::Closed);
}
