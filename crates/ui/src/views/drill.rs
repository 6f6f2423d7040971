use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{DrillAction, DrillEffect, DrillVm, KEYPAD, action_for_key};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
use services::DrillError;

#[component]
pub fn DrillView(on_exit: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(move || ctx.start_drill().map(DrillVm::new));

    let dispatch = use_callback(move |action: DrillAction| {
        let mut vm = vm;
        let effect = {
            let mut guard = vm.write();
            match guard.as_mut() {
                Ok(drill) => drill.dispatch(action),
                Err(_) => DrillEffect::None,
            }
        };
        if effect == DrillEffect::Exit {
            on_exit.call(());
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DrillTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let on_key = move |evt: KeyboardEvent| {
        if let Some(action) = action_for_key(&evt.data.key()) {
            evt.prevent_default();
            dispatch.call(action);
        }
    };

    let guard = vm.read();
    let drill = match guard.as_ref() {
        Ok(drill) => drill,
        Err(err) => {
            return rsx! {
                div { class: "page drill-page",
                    p { class: "drill-error", "Could not start the drill: {err}" }
                }
            };
        }
    };

    let expression = drill.expression();
    let pending = drill.pending().to_string();
    let score_label = drill.score_label();
    let progress_label = drill.progress_label();
    let input_enabled = drill.input_enabled();
    let feedback = drill.notice().map(|notice| {
        let class = if notice.feedback.is_correct() {
            "drill-notice drill-notice--correct"
        } else {
            "drill-notice drill-notice--incorrect"
        };
        (class, notice.feedback.message())
    });
    let completion = drill
        .notice()
        .and_then(|notice| notice.report)
        .map(|report| report.message());
    drop(guard);

    rsx! {
        div {
            class: "page drill-page",
            id: "drill-root",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_key,
            div { class: "drill-frame",
                p { class: "drill-progress", "{progress_label}" }
                h2 { class: "drill-problem", id: "drill-problem", "{expression}" }
                div { class: "drill-answer", id: "drill-answer", "{pending}" }

                div { class: "drill-keypad",
                    for row in KEYPAD {
                        for pad in row {
                            button {
                                key: "{pad.label}",
                                class: "drill-keypad__key",
                                r#type: "button",
                                disabled: !input_enabled,
                                onclick: move |_| dispatch.call(pad.action),
                                "{pad.label}"
                            }
                        }
                    }
                }

                button {
                    class: "drill-btn drill-btn--submit",
                    id: "drill-submit",
                    r#type: "button",
                    disabled: !input_enabled,
                    onclick: move |_| dispatch.call(DrillAction::Submit),
                    "Submit"
                }
                button {
                    class: "drill-btn drill-btn--restart",
                    id: "drill-restart",
                    r#type: "button",
                    onclick: move |_| dispatch.call(DrillAction::Restart),
                    "Restart"
                }
                button {
                    class: "drill-btn drill-btn--exit",
                    id: "drill-exit",
                    r#type: "button",
                    onclick: move |_| dispatch.call(DrillAction::Exit),
                    "Exit"
                }

                p { class: "drill-score", id: "drill-score", "{score_label}" }

                if let Some((class, message)) = feedback {
                    p { class: "{class}", role: "status", "{message}" }
                }
                if let Some(message) = completion {
                    p { class: "drill-notice drill-notice--complete", role: "status", "{message}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DrillTestHandles {
    dispatch: Rc<RefCell<Option<Callback<DrillAction>>>>,
    vm: Rc<RefCell<Option<Signal<Result<DrillVm, DrillError>>>>>,
}

#[cfg(test)]
impl DrillTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<DrillAction>,
        vm: Signal<Result<DrillVm, DrillError>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<DrillAction> {
        (*self.dispatch.borrow()).expect("drill dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Result<DrillVm, DrillError>> {
        (*self.vm.borrow()).expect("drill vm registered")
    }
}
