use crate::core::{
    FrameInput, LiveVisualState, RenderTarget, ScrollDriver, SectionGeometry, SectionResolver,
    SectionStore, SectionTint,
};
use crate::dom::{BrowserScroll, DomSections};
use crate::input::PointerState;
use crate::nav::ProgressBar;
use crate::overlay;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long gaps (background tab, debugger) would otherwise jump the scene clock.
const MAX_FRAME_DT_SEC: f32 = 0.1;

/// Stand-in target while WebGPU is unavailable; DOM consumers keep working.
struct Detached;

impl RenderTarget for Detached {
    fn apply_visual_state(&mut self, _state: &LiveVisualState) {}
}

pub struct FrameContext<'a> {
    pub driver: Rc<RefCell<ScrollDriver<BrowserScroll>>>,
    pub resolver: SectionResolver,
    pub sections: Option<DomSections>,
    pub store: Rc<RefCell<SectionStore>>,
    pub sphere_tint: SectionTint,
    pub particle_tint: SectionTint,
    pub progress_bar: ProgressBar,
    pub pointer: Rc<RefCell<PointerState>>,
    pub debug_visible: Rc<Cell<bool>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    pub elapsed_sec: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.elapsed_sec += dt_sec;

        let input = FrameInput {
            time_sec: self.elapsed_sec,
            pointer_ndc: self.pointer.borrow().parallax_input(),
        };
        let sample = {
            let mut driver = self.driver.borrow_mut();
            match &mut self.gpu {
                Some(g) => driver.frame(g, input),
                None => driver.frame(&mut Detached, input),
            }
        };

        if sample.sampled {
            let geometry = self.sections.as_ref().map(|s| s as &dyn SectionGeometry);
            self.resolver
                .update(sample.progress, geometry, &mut self.store.borrow_mut());
        }
        let section = self.store.borrow().current_or_home();

        let sphere = self.sphere_tint.step(section);
        let particles = self.particle_tint.step(section);
        if let Some(g) = &mut self.gpu {
            g.set_section_tints(sphere, particles);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(dt_sec) {
                log::warn!("render error: {:?}", e);
            }
        }

        self.progress_bar.update(sample.progress, section);
        if self.debug_visible.get() {
            let text = overlay::readout_text(
                sample.live.camera_distance,
                sample.live.field_of_view,
                sample.progress,
                section.as_str(),
            );
            overlay::update_readout(&self.document, &text);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    initial: &LiveVisualState,
    particle_seed: u64,
) -> Option<render::GpuState<'static>> {
    match render::GpuState::new(canvas, initial, particle_seed).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` loop.
pub struct LoopHandle {
    tick: Tick,
    raf_id: Rc<Cell<Option<i32>>>,
    alive: Rc<Cell<bool>>,
}

impl LoopHandle {
    /// Cancel the pending frame and release the loop closure. Idempotent.
    pub fn cancel(&self) {
        if !self.alive.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference cycle through `tick`.
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Tick, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let alive = Rc::new(Cell::new(true));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let alive_clone = alive.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        if !alive_clone.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);

    LoopHandle {
        tick,
        raf_id,
        alive,
    }
}
