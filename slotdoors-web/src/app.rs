use crate::boot;
use crate::components::button::Button;
use yew::prelude::*;

/// Where the page is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootPhase {
    Loading,
    Ready,
    Failed(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let phase = use_state(|| BootPhase::Loading);
    let machine: boot::MachineSlot = use_mut_ref(|| None);
    let doors_ref = use_node_ref();

    {
        let phase = phase.clone();
        let machine = machine.clone();
        let doors_ref = doors_ref.clone();
        use_effect_with((), move |()| {
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                let Some(root) = doors_ref.cast::<web_sys::Element>() else {
                    phase.set(BootPhase::Failed("doors container missing".to_string()));
                    return;
                };
                match boot::boot(root, machine).await {
                    Ok(()) => phase.set(BootPhase::Ready),
                    Err(message) => {
                        crate::dom::console_error(&message);
                        phase.set(BootPhase::Failed(message));
                    }
                }
            });
            #[cfg(not(target_arch = "wasm32"))]
            let _ = (phase, machine, doors_ref);
            || {}
        });
    }

    let on_spin = {
        let machine = machine.clone();
        Callback::from(move |_| {
            if let Some(machine) = machine.borrow_mut().as_mut() {
                machine.spin();
            }
        })
    };

    html! {
        <main class="slotmachine">
            <div id="doors" class="doors" ref={doors_ref}></div>
            {
                match &*phase {
                    BootPhase::Loading => html! {
                        <p class="boot-status">{ "Loading reels…" }</p>
                    },
                    BootPhase::Failed(message) => html! {
                        <p class="boot-error" role="alert">{ message.clone() }</p>
                    },
                    BootPhase::Ready => html! {
                        <Button id="spin-slotmachine-button" label="Spin" onclick={on_spin} />
                    },
                }
            }
        </main>
    }
}
