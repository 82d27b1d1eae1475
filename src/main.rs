use chrono::Local;
use log::error;
use pixels::{Pixels, SurfaceTexture};
use structopt::StructOpt;
use winit::{
    dpi::LogicalSize,
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use winit_input_helper::WinitInputHelper;

mod canvas;
mod frame;
mod renderer;
mod segments;
mod timer;

use frame::FrameCanvas;
use renderer::ClockRenderer;
use timer::{TickEvent, TickTimer};

#[derive(Debug, StructOpt)]
#[structopt(name = "segment-clock", about = "A seven-segment digital clock.")]
struct Opt {
    /// Initial window scale factor.
    #[structopt(long, default_value = "2")]
    scale: u32,
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();
    let scale = opt.scale.max(1);
    let event_loop = EventLoop::<TickEvent>::with_user_event();
    let mut input = WinitInputHelper::new();
    let window = {
        let size = LogicalSize::new(
            ClockRenderer::WIDTH * scale,
            ClockRenderer::HEIGHT * scale,
        );
        WindowBuilder::new()
            .with_title("Clock")
            .with_inner_size(size)
            .with_min_inner_size(LogicalSize::new(ClockRenderer::WIDTH, ClockRenderer::HEIGHT))
            .build(&event_loop)
            .unwrap()
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(ClockRenderer::WIDTH, ClockRenderer::HEIGHT, surface_texture).unwrap()
    };

    let mut renderer = ClockRenderer::new(Local::now().naive_local());
    let mut timer = TickTimer::new(event_loop.create_proxy());
    timer.start();

    event_loop.run(move |event, _, control_flow| {
        match event {
            // tick marshaled in from the timer thread
            Event::UserEvent(TickEvent) => {
                renderer.set_displayed_time(Local::now().naive_local());
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let mut canvas = FrameCanvas::new(
                    pixels.get_frame(),
                    ClockRenderer::WIDTH,
                    ClockRenderer::HEIGHT,
                );
                renderer.draw(&mut canvas);
                if pixels
                    .render()
                    .map_err(|e| error!("pixels.render() failed: {}", e))
                    .is_err()
                {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            // pause the clock while the window is not shown
            Event::Suspended => timer.stop(),
            Event::Resumed => {
                if !timer.is_running() {
                    timer.start();
                }
            }
            _ => {}
        }

        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                timer.stop();
                *control_flow = ControlFlow::Exit;
                return;
            }

            // Resize the window
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
                window.request_redraw();
            }
        }
    })
}
