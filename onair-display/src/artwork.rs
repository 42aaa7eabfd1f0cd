//! Sign artwork
//!
//! Fixed geometry of the 32x16 sign: two side bars with corner masks that
//! open or close the frame, three "radio wave" wings either side, and two
//! centered lines of text.

use embedded_graphics::mono_font::ascii::FONT_4X6;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Polyline, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use onair_core::scene::{FrameStyle, PaletteColor, Scene};

/// Side bars (x, y, width, height), always dim white
const SIDE_BARS: [(i32, i32, u32, u32); 2] = [(0, 0, 2, 16), (30, 0, 2, 16)];

/// Corner masks drawn over the side bars
const CORNER_MASKS: [(i32, i32, u32, u32); 4] =
    [(1, 0, 4, 2), (27, 0, 4, 2), (1, 14, 6, 2), (24, 14, 6, 2)];

/// Wing outlines; each polygon is closed back to its first vertex
const WINGS: [[(i32, i32); 4]; 6] = [
    [(2, 3), (7, 3), (7, 4), (3, 4)],
    [(4, 6), (7, 6), (7, 7), (5, 7)],
    [(5, 9), (7, 9), (7, 10), (6, 10)],
    [(23, 3), (29, 3), (23, 4), (28, 4)],
    [(23, 6), (27, 6), (23, 7), (26, 7)],
    [(23, 9), (25, 9), (23, 10), (24, 10)],
];

/// Convert a palette entry to a panel color
pub fn palette_rgb(color: PaletteColor) -> Rgb888 {
    let (r, g, b) = color.components();
    Rgb888::new(r, g, b)
}

fn fill_rect<D>(
    target: &mut D,
    (x, y, w, h): (i32, i32, u32, u32),
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

/// Draw a complete scene
///
/// The target is cleared first, so the result depends only on `scene`.
pub fn draw_scene<D>(target: &mut D, scene: &Scene) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    target.clear(Rgb888::BLACK)?;
    if scene.blank {
        return Ok(());
    }

    let frame_color = palette_rgb(PaletteColor::DimWhite);
    for bar in SIDE_BARS {
        fill_rect(target, bar, frame_color)?;
    }

    let mask_color = match scene.frame {
        FrameStyle::Open => Rgb888::BLACK,
        FrameStyle::Closed => frame_color,
    };
    for mask in CORNER_MASKS {
        fill_rect(target, mask, mask_color)?;
    }

    let wing_style = PrimitiveStyle::with_stroke(palette_rgb(scene.wing_color), 1);
    for wing in WINGS.iter() {
        let mut points = [Point::zero(); 5];
        for (point, &(x, y)) in points.iter_mut().zip(wing.iter()) {
            *point = Point::new(x, y);
        }
        points[4] = points[0];
        Polyline::new(&points).into_styled(wing_style).draw(target)?;
    }

    for line in scene.lines.iter().filter(|l| !l.text.is_empty()) {
        let style = MonoTextStyle::new(&FONT_4X6, palette_rgb(line.color));
        Text::with_baseline(
            line.text.as_str(),
            Point::new(line.x.into(), line.y.into()),
            style,
            Baseline::Middle,
        )
        .draw(target)?;
    }

    Ok(())
}
