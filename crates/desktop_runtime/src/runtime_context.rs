//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host
//! bootstrap wiring. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::DesktopHostContext,
    inventory::DesktopInventory,
    model::{DesktopState, InteractionState, Viewport},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Static icon and start-menu inventory.
    pub inventory: &'static DesktopInventory,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag/transition interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn install_viewport_tracking(runtime: DesktopRuntimeContext) {
    let resize_listener = window_event_listener(ev::resize, move |_| {
        let viewport = runtime.host.get_value().viewport();
        runtime.dispatch_action(DesktopAction::SetViewport { viewport });
    });
    on_cleanup(move || resize_listener.remove());
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch);
    install_viewport_tracking(runtime);
    effect_executor::install(runtime);
    on_cleanup(move || runtime.host.get_value().shutdown());
}

/// Applies one action to copies of the signal values and writes back only what changed.
fn apply_action(
    state: RwSignal<DesktopState>,
    interaction: RwSignal<InteractionState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    inventory: &DesktopInventory,
    action: DesktopAction,
) {
    let mut desktop = state.get_untracked();
    let mut ui = interaction.get_untracked();
    let previous_desktop = desktop.clone();
    let previous_ui = ui.clone();

    let new_effects = reduce_desktop(&mut desktop, &mut ui, inventory, action);
    if desktop != previous_desktop {
        state.set(desktop);
    }
    if ui != previous_ui {
        interaction.set(ui);
    }
    if !new_effects.is_empty() {
        let mut queue = effects.get_untracked();
        queue.extend(new_effects);
        effects.set(queue);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host_context = DesktopHostContext::new(host_services);
    let viewport: Viewport = host_context.viewport();
    let host = store_value(host_context);
    let inventory = DesktopInventory::builtin();
    let state = create_rw_signal(DesktopState::new(viewport));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        apply_action(state, interaction, effects, inventory, action);
    });

    let runtime = DesktopRuntimeContext {
        host,
        inventory,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
