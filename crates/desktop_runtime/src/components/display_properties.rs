use super::*;
use crate::backgrounds::{resolve_stored_background, BACKGROUND_PRESETS};

#[component]
pub(super) fn DisplayPropertiesPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    // Local preview; the desktop only changes on Apply.
    let selection = create_rw_signal(runtime.state.get_untracked().background_id);
    let applied = move || runtime.state.with(|desktop| desktop.background_id.clone());

    let preview_style = move || resolve_stored_background(&selection.get()).css_style();
    let current_name = move || resolve_stored_background(&applied()).name;

    let apply = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::SetBackground {
            background_id: selection.get_untracked(),
        });
    };

    view! {
        <div class="panel display-properties">
            <div class="display-properties-tabs" role="tablist">
                <div class="display-properties-tab active" role="tab" aria-selected="true">
                    "Background"
                </div>
                <div class="display-properties-tab" role="tab" aria-selected="false">"Screen Saver"</div>
                <div class="display-properties-tab" role="tab" aria-selected="false">"Appearance"</div>
                <div class="display-properties-tab" role="tab" aria-selected="false">"Settings"</div>
            </div>

            <div class="display-properties-content">
                <div class="display-preview" aria-hidden="true">
                    <div class="display-preview-monitor">
                        <div class="display-preview-screen" style=preview_style>
                            <div class="display-preview-icon"></div>
                        </div>
                        <div class="display-preview-stand"></div>
                    </div>
                </div>

                <label class="display-properties-label" for="background-select">
                    "Select a background:"
                </label>
                <select
                    id="background-select"
                    class="display-properties-select"
                    prop:value=move || selection.get()
                    on:change=move |ev| selection.set(event_target_value(&ev))
                >
                    {BACKGROUND_PRESETS
                        .iter()
                        .map(|preset| view! { <option value=preset.id>{preset.name}</option> })
                        .collect_view()}
                </select>

                <div class="display-swatches">
                    {BACKGROUND_PRESETS
                        .iter()
                        .map(|preset| {
                            let id = preset.id;
                            view! {
                                <button
                                    class="display-swatch"
                                    class:selected=move || selection.get() == id
                                    style=preset.css_style()
                                    title=preset.name
                                    aria-label=preset.name
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        selection.set(id.to_string());
                                    }
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="display-current">
                    <strong>"Current: "</strong>
                    {current_name}
                </div>
            </div>

            <div class="display-properties-footer">
                <button class="panel-button" on:click=apply>"Apply"</button>
            </div>
        </div>
    }
}
