use leptos::{create_effect, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let preferences = persistence::load_boot_preferences(host.prefs_store().as_ref()).await;
            if !host.is_active() {
                return;
            }
            dispatch.call(DesktopAction::HydratePreferences { preferences });
            dispatch.call(DesktopAction::BootHydrationComplete);
        });
    });
}
