use image::{Rgba, RgbaImage};
use kurbo::{Circle, Point, RoundedRect, Shape};

use crate::{
    foundation::{core::Canvas, error::SnakeGifResult},
    game::{
        config::{GameConfig, Palette, Rgb8},
        state::Snapshot,
    },
};

/// Sideways wobble of the chain, as a fraction of a cell.
const SWAY_AMPLITUDE: f64 = 0.2;
const SWAY_SPEED: f64 = 6.0;
const SWAY_PHASE_STEP: f64 = 0.6;
const FRUIT_PULSE_SPEED: f64 = 4.0;

pub fn lerp_rgb(a: Rgb8, b: Rgb8, t: f64) -> Rgb8 {
    let mut out = [0u8; 3];
    for i in 0..3 {
        let (a, b) = (f64::from(a[i]), f64::from(b[i]));
        out[i] = (a + (b - a) * t) as u8;
    }
    out
}

/// Fruit colour at `elapsed_secs`: the base colour pulsing between 70% and 100%.
pub fn fruit_color(base: Rgb8, elapsed_secs: f64) -> Rgb8 {
    let flash = 0.5 + 0.5 * (elapsed_secs * FRUIT_PULSE_SPEED).sin();
    base.map(|c| (f64::from(c) * (0.7 + 0.3 * flash)).min(255.0) as u8)
}

/// Fill every pixel whose centre lies inside `shape`.
pub fn fill_shape(img: &mut RgbaImage, shape: &impl Shape, rgb: Rgb8) {
    let bb = shape.bounding_box();
    let (w, h) = img.dimensions();
    let x0 = bb.x0.floor().max(0.0) as u32;
    let y0 = bb.y0.floor().max(0.0) as u32;
    let x1 = (bb.x1.ceil().max(0.0) as u32).min(w);
    let y1 = (bb.y1.ceil().max(0.0) as u32).min(h);

    let px = Rgba([rgb[0], rgb[1], rgb[2], 255]);
    for y in y0..y1 {
        for x in x0..x1 {
            if shape.contains(Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)) {
                img.put_pixel(x, y, px);
            }
        }
    }
}

/// Rasterises board snapshots onto a transparent canvas.
#[derive(Clone, Debug)]
pub struct SceneRenderer {
    canvas: Canvas,
    cell: f64,
    palette: Palette,
}

impl SceneRenderer {
    pub fn new(cfg: &GameConfig) -> SnakeGifResult<Self> {
        Ok(Self {
            canvas: cfg.canvas()?,
            cell: f64::from(cfg.cell_size),
            palette: cfg.palette,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn render(&self, snap: &Snapshot) -> RgbaImage {
        let mut img = RgbaImage::new(self.canvas.width, self.canvas.height);
        let cell = self.cell;
        let t = snap.elapsed_secs;

        if let Some(fruit) = snap.fruit {
            let x0 = f64::from(fruit.x) * cell;
            let y0 = f64::from(fruit.y) * cell;
            let radius = (cell as u32 / 3) as f64;
            let rect = RoundedRect::new(x0, y0, x0 + cell, y0 + cell, radius);
            fill_shape(&mut img, &rect, fruit_color(self.palette.fruit, t));
        }

        let (dx, dy) = snap.direction.delta();
        let (nx, ny) = (f64::from(-dy), f64::from(dx));
        let amp = cell * SWAY_AMPLITUDE;
        let phase = t * SWAY_SPEED;
        let last = snap.snake.len().saturating_sub(1).max(1) as f64;

        for (i, seg) in snap.snake.iter().enumerate() {
            let k = i as f64 / last;
            let rgb = lerp_rgb(self.palette.tail, self.palette.head, k);
            let size = cell * (0.35 + 0.65 * k);
            let sway = amp * (phase + i as f64 * SWAY_PHASE_STEP).sin();
            let cx = f64::from(seg.x) * cell + cell / 2.0 + nx * sway;
            let cy = f64::from(seg.y) * cell + cell / 2.0 + ny * sway;
            let center = Point::new(cx.trunc(), cy.trunc());
            let disc = Circle::new(center, (size / 2.0).trunc());
            fill_shape(&mut img, &disc, rgb);
        }

        img
    }
}

#[cfg(test)]
#[path = "../../tests/unit/game/render.rs"]
mod tests;
