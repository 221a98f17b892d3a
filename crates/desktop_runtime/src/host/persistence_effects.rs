use leptos::{logging, spawn_local};

use crate::{host::DesktopHostContext, persistence};

pub(super) fn persist_welcome_dismissed(host: DesktopHostContext) {
    spawn_local(async move {
        if let Err(err) = persistence::persist_welcome_dismissed(host.prefs_store().as_ref()).await
        {
            logging::warn!("persist welcome dismissal failed: {err}");
        }
    });
}

pub(super) fn persist_background(host: DesktopHostContext, background_id: String) {
    spawn_local(async move {
        if let Err(err) =
            persistence::persist_background(host.prefs_store().as_ref(), &background_id).await
        {
            logging::warn!("persist background failed: {err}");
        }
    });
}

pub(super) fn persist_audio_muted(host: DesktopHostContext, muted: bool) {
    spawn_local(async move {
        if let Err(err) = persistence::persist_audio_muted(host.prefs_store().as_ref(), muted).await
        {
            logging::warn!("persist chat mute flag failed: {err}");
        }
    });
}
