use desktop_runtime::{AppLauncher, DesktopWindow, WindowManagerProvider};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::{DesktopSurface, LauncherGrid, WindowStack};
use window_manager::{ConfigError, LauncherEntry, LauncherManifest, WindowEvent, WindowOptions};

mod launcher_catalog {
    include!(concat!(env!("OUT_DIR"), "/launcher_catalog_generated.rs"));
}

const EVENT_LOG_CAPACITY: usize = 8;

/// Launcher manifest embedded by the build script.
///
/// # Errors
///
/// Returns [`ConfigError`] if the embedded payload no longer decodes, which only happens when the
/// build script and the runtime disagree on the manifest shape.
pub fn launcher_manifest() -> Result<LauncherManifest, ConfigError> {
    LauncherManifest::from_json(launcher_catalog::LAUNCHER_MANIFEST_JSON)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Window Manager" />
        <Meta name="description" content="Draggable, resizable windows with a minimized-window dock." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/test/windows" view=WindowTestPage />
                </Routes>
            </main>
        </Router>
    }
}

fn launcher_icons(launchers: Vec<LauncherEntry>) -> impl IntoView {
    launchers
        .into_iter()
        .map(|entry| {
            let body = entry.body.clone();
            view! {
                <AppLauncher
                    id=entry.window_id()
                    label=entry.label.clone()
                    icon=entry.icon.clone()
                    window_title=entry.title().to_string()
                    options=entry.window_options()
                >
                    <p class="launcher-window-body">{body.clone()}</p>
                </AppLauncher>
            }
        })
        .collect_view()
}

fn manifest_error_notice(err: ConfigError) -> View {
    logging::error!("launcher manifest rejected: {err}");
    view! {
        <section class="canonical-content" role="alert">
            <h1>"Desktop unavailable"</h1>
            <p>{err.to_string()}</p>
        </section>
    }
    .into_view()
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let manifest = match launcher_manifest() {
        Ok(manifest) => manifest,
        Err(err) => return manifest_error_notice(err),
    };

    view! {
        <WindowManagerProvider config=manifest.window_manager>
            <DesktopSurface id="desktop" aria_label="Desktop">
                <LauncherGrid aria_label="Applications">
                    {launcher_icons(manifest.launchers)}
                </LauncherGrid>
            </DesktopSurface>
        </WindowManagerProvider>
    }
    .into_view()
}

fn push_event_line(log: &mut Vec<String>, event: &WindowEvent) {
    log.push(format!("{event:?}"));
    if log.len() > EVENT_LOG_CAPACITY {
        let overflow = log.len() - EVENT_LOG_CAPACITY;
        log.drain(..overflow);
    }
}

#[component]
/// Manual test bench: every launcher, a standalone window, and a live lifecycle event log.
pub fn WindowTestPage() -> impl IntoView {
    let manifest = match launcher_manifest() {
        Ok(manifest) => manifest,
        Err(err) => return manifest_error_notice(err),
    };
    let event_log = create_rw_signal(Vec::<String>::new());
    let on_event = Callback::new(move |event: WindowEvent| {
        event_log.update(|log| push_event_line(log, &event));
    });

    view! {
        <WindowManagerProvider config=manifest.window_manager on_event=on_event>
            <DesktopSurface id="desktop-test" aria_label="Window test bench" test_bench=true>
                <LauncherGrid aria_label="Applications">
                    {launcher_icons(manifest.launchers)}
                </LauncherGrid>
                <WindowStack>
                    <DesktopWindow
                        id="demo-window"
                        title="Demo Window"
                        options=WindowOptions::new()
                            .with_position(400.0, 100.0)
                            .with_size(350.0, 250.0)
                    >
                        <p>"Standalone window without a launcher. Closing it hides it for good."</p>
                    </DesktopWindow>
                </WindowStack>
                <ol class="window-event-log" aria-label="Window events">
                    <For each=move || event_log.get().into_iter().enumerate() key=|(index, line)| (*index, line.clone()) let:entry>
                        <li>{entry.1}</li>
                    </For>
                </ol>
            </DesktopSurface>
        </WindowManagerProvider>
    }
    .into_view()
}
