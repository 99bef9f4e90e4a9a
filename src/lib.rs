#![cfg(target_arch = "wasm32")]
use crate::core::{
    DeviceProfile, DriverConfig, ResolveStrategy, ScrollDriver, SectionId, SectionPalette,
    SectionResolver, SectionStore, SectionTint, SECTION_TINT_ALPHA,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod mount;
mod nav;
mod overlay;
mod render;

/// Everything `unmount` has to tear down.
struct Mounted {
    frame_loop: frame::LoopHandle,
    listeners: Vec<dom::Listener>,
    store: Rc<RefCell<SectionStore>>,
}

thread_local! {
    static MOUNT: RefCell<mount::MountSlot<Mounted>> = const { RefCell::new(mount::MountSlot::Idle) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let debug = web::window()
        .map(|w| dom::has_query_flag(&w, "debug"))
        .unwrap_or(false);
    let level = if debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the render loop and detach every listener. Safe to call repeatedly,
/// including while the scene is still mounting.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNT.with(|m| {
        let mut slot = m.borrow_mut();
        let mounting = matches!(*slot, mount::MountSlot::Mounting { .. });
        let mounted = slot.unmount();
        if mounting {
            log::info!("[mount] unmount requested while mounting");
        } else if mounted.is_none() {
            log::debug!("[mount] unmount: nothing mounted");
        }
        mounted
    });
    if let Some(mounted) = mounted {
        teardown(mounted);
    }
}

fn teardown(mounted: Mounted) {
    mounted.frame_loop.cancel();
    let transitions = {
        let mut store = mounted.store.borrow_mut();
        store.clear_listeners();
        store.transitions()
    };
    let n = mounted.listeners.len();
    drop(mounted);
    log::info!(
        "[mount] unmounted after {} section changes, {} listeners detached",
        transitions,
        n
    );
}

fn log_config(profile: DeviceProfile, viewport_width: f64, config: &DriverConfig) {
    log::info!(
        "[config] profile={} viewport={:.0}px waypoints={} sample={:?} resolver={:?} parallax={}",
        profile.as_str(),
        viewport_width,
        config.waypoints.len(),
        config.sample_mode,
        config.resolve_strategy,
        config.parallax.is_some()
    );
    for w in config.waypoints.iter() {
        log::debug!(
            "[config] {} dist={:.2} fov={:.1} ambient={:.2}",
            w.id,
            w.camera_distance,
            w.field_of_view,
            w.ambient_intensity
        );
    }
}

async fn init() -> anyhow::Result<()> {
    if !MOUNT.with(|m| m.borrow_mut().begin()) {
        log::warn!("[mount] already mounted");
        return Ok(());
    }
    let (mounted, result) = match mount_scene().await {
        Ok(mounted) => (mounted, Ok(())),
        Err(e) => (None, Err(e)),
    };
    if let Some(cancelled) = MOUNT.with(|m| m.borrow_mut().finish(mounted)) {
        teardown(cancelled);
    }
    result
}

fn cancel_requested() -> bool {
    MOUNT.with(|m| m.borrow().cancel_requested())
}

async fn mount_scene() -> anyhow::Result<Option<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let caps = dom::device_capabilities(&window);
    let profile = DeviceProfile::detect(&caps);
    let config = DriverConfig::for_profile(profile);
    log_config(profile, caps.viewport_width, &config);

    let ids: Vec<SectionId> = config.waypoints.ids().collect();
    let resolver = SectionResolver::new(config.resolve_strategy, ids.iter().copied());
    let sections = match config.resolve_strategy {
        ResolveStrategy::Boundaries { .. } => Some(dom::DomSections::new(document.clone(), ids)),
        ResolveStrategy::Progress => None,
    };
    let driver = Rc::new(RefCell::new(ScrollDriver::new(
        config,
        dom::BrowserScroll::new(window.clone()),
    )));

    let store = Rc::new(RefCell::new(SectionStore::new()));
    nav::subscribe_section_consumers(&document, &mut store.borrow_mut());

    let debug_visible = Rc::new(Cell::new(false));
    overlay::set_visible(&document, false);
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));

    let mut listeners = vec![
        events::wire_scroll(&window, driver.clone())?,
        events::wire_resize(&window, canvas.clone(), driver.clone())?,
        events::wire_debug_toggle(&window, document.clone(), debug_visible.clone())?,
    ];
    listeners.extend(events::wire_pointer_tracking(&window, &document, pointer.clone())?);

    let initial = *driver.borrow().live();
    let particle_seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let gpu = frame::init_gpu(&canvas, &initial, particle_seed).await;
    if cancel_requested() {
        store.borrow_mut().clear_listeners();
        log::info!(
            "[mount] cancelled before the first frame, {} listeners detached",
            listeners.len()
        );
        return Ok(None);
    }
    if gpu.is_none() {
        log::warn!("[gpu] unavailable; scroll state still drives the page chrome");
    }

    let sphere_tint =
        SectionTint::new(SectionPalette::sphere(), SectionId::Home, SECTION_TINT_ALPHA)?;
    let particle_tint =
        SectionTint::new(SectionPalette::particles(), SectionId::Home, SECTION_TINT_ALPHA)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver,
        resolver,
        sections,
        store: store.clone(),
        sphere_tint,
        particle_tint,
        progress_bar: nav::ProgressBar::new(&document, SectionPalette::sphere()),
        pointer,
        debug_visible,
        document,
        canvas,
        gpu,
        last_instant: Instant::now(),
        elapsed_sec: 0.0,
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    log::info!("[mount] mounted ({})", profile.as_str());
    Ok(Some(Mounted {
        frame_loop,
        listeners,
        store,
    }))
}
