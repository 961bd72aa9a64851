pub mod life;
pub mod timer;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use pixel_surface::{
    rate_title, ColorGrid, DisplaySurface, Flow, SoftbufferWindow, SurfaceConfig, SurfaceError,
    SurfaceState, TitleSlot,
};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use life::Life;
use timer::StepTimer;

const MIN_FPS: f64 = 0.25;
const MAX_FPS: f64 = 480.0;

/// Owner application: runs the simulation and feeds the display
pub struct App {
    surface: DisplaySurface<SoftbufferWindow>,
    life: Life,
    rate: Rc<Cell<f64>>,
    strokes: Rc<RefCell<Vec<(i32, i32)>>>,
    timer: StepTimer,
    last_tick: Instant,
}

impl App {
    pub fn new(config: SurfaceConfig, rows: usize, cols: usize) -> Result<Self, SurfaceError> {
        let rate = Rc::new(Cell::new(config.fps.clamp(MIN_FPS, MAX_FPS)));
        let strokes = Rc::new(RefCell::new(Vec::<(i32, i32)>::new()));
        let title = TitleSlot::default();

        let on_draw = {
            let strokes = strokes.clone();
            move |x: i32, y: i32| strokes.borrow_mut().push((x, y))
        };
        let on_rate_change = {
            let rate = rate.clone();
            let title = title.clone();
            move |transform: fn(f64) -> f64| {
                let new_rate = transform(rate.get()).clamp(MIN_FPS, MAX_FPS);
                rate.set(new_rate);
                title.set(rate_title(new_rate));
                log::info!("simulation rate now {} fps", new_rate);
            }
        };

        let surface =
            DisplaySurface::with_config(config, on_draw, on_rate_change)?.with_title_slot(title);

        Ok(Self {
            timer: StepTimer::new(rate.get()),
            surface,
            life: Life::seeded(rows, cols),
            rate,
            strokes,
            last_tick: Instant::now(),
        })
    }

    /// Turn queued pointer strokes into live cells
    fn apply_strokes(&mut self) -> bool {
        let strokes: Vec<(i32, i32)> = self.strokes.borrow_mut().drain(..).collect();
        let (rows, cols) = (self.life.rows(), self.life.cols());

        let mut changed = false;
        for (x, y) in strokes {
            match self.surface.cell_at(x, y, rows, cols) {
                Some((row, col)) if !self.life.is_alive(row, col) => {
                    self.life.set_alive(row, col);
                    changed = true;
                }
                _ => {}
            }
        }
        changed
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.state() != SurfaceState::Initializing {
            return;
        }

        match SoftbufferWindow::create(event_loop, self.surface.config()) {
            Ok(window) => {
                self.surface.attach(window);
                self.surface.set_title(&rate_title(self.rate.get()));
                self.last_tick = Instant::now();
            }
            Err(e) => {
                log::error!("failed to open display: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            if let Err(e) = self.surface.render(&self.life) {
                log::error!("render failed: {}", e);
            }
            return;
        }

        if self.surface.handle_window_event(&event) == Flow::Exit {
            event_loop.exit();
            return;
        }

        if self.apply_strokes() {
            self.surface.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.surface.is_ready() {
            return;
        }

        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;

        if self.timer.rate() != self.rate.get() {
            self.timer.set_rate(self.rate.get());
        }
        if self.timer.tick(delta) {
            self.life.step();
            log::trace!("generation stepped, population {}", self.life.population());
            self.surface.request_redraw();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(now + self.timer.remaining()));
    }
}
