use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use drill_core::DrillSettings;
use drill_core::time::fixed_now;
use services::Clock;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::DrillView;
use crate::vm::{DrillAction, DrillVm};

use super::drill::DrillTestHandles;

struct TestApp {
    settings: DrillSettings,
    seed: Option<u64>,
}

impl UiApp for TestApp {
    fn settings(&self) -> DrillSettings {
        self.settings
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    context: AppContext,
    handles: DrillTestHandles,
    exits: Rc<Cell<u32>>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn DrillViewHarness(props: HarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.handles.clone());
    let exits = Rc::clone(&props.exits);
    rsx! {
        DrillView { on_exit: move |()| exits.set(exits.get() + 1) }
    }
}

pub struct DrillHarness {
    pub dom: VirtualDom,
    handles: DrillTestHandles,
    exits: Rc<Cell<u32>>,
}

impl DrillHarness {
    pub fn dispatch(&mut self, action: DrillAction) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(action));
        drive_dom(&mut self.dom);
    }

    /// Type `answer` on the keypad.
    pub fn type_answer(&mut self, answer: &str) {
        for ch in answer.chars() {
            let action = match ch.to_digit(10) {
                Some(d) => DrillAction::Digit(u8::try_from(d).expect("single digit")),
                None => DrillAction::Decimal,
            };
            self.dispatch(action);
        }
    }

    /// The correct answer to the problem on screen.
    pub fn current_answer(&self) -> String {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| {
            vm.read()
                .as_ref()
                .map(|drill| drill.drill().current_problem().answer().to_string())
                .expect("drill started")
        })
    }

    pub fn current_expression(&self) -> String {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| {
            vm.read()
                .as_ref()
                .map(DrillVm::expression)
                .expect("drill started")
        })
    }

    pub fn exits(&self) -> u32 {
        self.exits.get()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_drill_harness(settings: DrillSettings, seed: u64) -> DrillHarness {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        settings,
        seed: Some(seed),
    });
    let handles = DrillTestHandles::default();
    let exits = Rc::new(Cell::new(0));

    let mut dom = VirtualDom::new_with_props(
        DrillViewHarness,
        HarnessProps {
            context: build_app_context(&app),
            handles: handles.clone(),
            exits: Rc::clone(&exits),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    DrillHarness {
        dom,
        handles,
        exits,
    }
}
