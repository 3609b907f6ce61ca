//! Firmware: runs one animation on a WS2812 matrix driven by PIO0.
//!
//! The render task ticks the selected app at its frame delay into an in-memory
//! frame buffer; presenting a frame hands a copy to the writer task, which
//! streams it to the LEDs.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::Executor;
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::RoscRng;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};
use life_matrix_embassy::prelude::*;
use life_matrix_embassy::random::small_rng;
use rand::RngCore;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

const PANEL_WIDTH: usize = 16;
const PANEL_HEIGHT: usize = 16;
const NUM_LEDS: usize = PANEL_WIDTH * PANEL_HEIGHT;
const NUM_DROPS: usize = 12;
// keeps a full white board within what the panel supply can deliver
const BRIGHTNESS: u8 = 48;

#[allow(dead_code)]
enum Scene {
    Life,
    Rain,
}

const SCENE: Scene = Scene::Life;

const LIFE: LifeConfig = LifeConfig {
    width: PANEL_WIDTH,
    height: PANEL_HEIGHT,
    ..LifeConfig::DEFAULT
};

const RAIN: RainConfig = RainConfig {
    width: PANEL_WIDTH as i32,
    height: PANEL_HEIGHT as i32,
    ..RainConfig::DEFAULT
};

static LEDS: Signal<CriticalSectionRawMutex, [RGB8; NUM_LEDS]> = Signal::new();

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

/// Frame buffer whose `present` publishes the frame to the writer task.
struct Panel {
    frame: FrameBuffer<PANEL_WIDTH, PANEL_HEIGHT>,
}

impl Panel {
    fn new() -> Self {
        Panel {
            frame: FrameBuffer::new(color::WHITE),
        }
    }
}

impl DisplaySurface for Panel {
    fn clear(&mut self) {
        self.frame.clear();
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.frame.set_pixel(x, y, on);
    }

    fn set_pixel_color(&mut self, x: i32, y: i32, color: RGB8) {
        self.frame.set_pixel_color(x, y, color);
    }

    fn present(&mut self) {
        self.frame.present();
        let mut leds = [color::BLACK; NUM_LEDS];
        self.frame.write_leds(&mut leds);
        LEDS.signal(leds);
    }
}

async fn run<A: App>(mut app: A) -> ! {
    let mut panel = Panel::new();
    let mut ticker = Ticker::every(Duration::from_millis(app.frame_delay_ms()));
    loop {
        let start = Instant::now();
        app.tick(&mut panel);
        trace!("calc: {} us", start.elapsed().as_micros());
        ticker.next().await;
    }
}

#[embassy_executor::task]
async fn life_task(seed: u64) {
    let life = unwrap!(app::life::new(small_rng(seed), LIFE));
    run(life).await
}

#[embassy_executor::task]
async fn rain_task(seed: u64) {
    let rain: app::rain::Rain<_, NUM_DROPS> = app::rain::Rain::new(small_rng(seed), RAIN);
    run(rain).await
}

#[embassy_executor::task]
async fn rgb_writer_task(mut ws2812: PioWs2812<'static, PIO0, 0, NUM_LEDS>) {
    loop {
        let mut leds = LEDS.wait().await;
        for led in leds.iter_mut() {
            *led = color::dim(*led, BRIGHTNESS);
        }
        ws2812.write(&leds).await;
    }
}

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[entry]
fn main() -> ! {
    info!("Start");
    let p = embassy_rp::init(Default::default());

    let seed = RoscRng.next_u64();
    info!("seed: {=u64:x}", seed);

    let ws2812 = {
        let Pio {
            mut common, sm0, ..
        } = Pio::new(p.PIO0, Irqs);
        let program = PioWs2812Program::new(&mut common);
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, &program)
    };

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        unwrap!(spawner.spawn(rgb_writer_task(ws2812)));
        match SCENE {
            Scene::Life => unwrap!(spawner.spawn(life_task(seed))),
            Scene::Rain => unwrap!(spawner.spawn(rain_task(seed))),
        }
    });
}
