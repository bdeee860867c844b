//! Draw a widget [`Render`] onto a monochrome `embedded-graphics` target.
//!
//! The title bar is anchored at the top center; value fields are anchored
//! at the screen center plus their horizontal offset. Highlighted text is
//! drawn dark on a light box grown by the configured padding.

use crate::adjust::{Anchor, HAlign, Render, TextField};
use crate::config::{PADDING_H_PX, PADDING_V_PX};
use embedded_graphics::geometry::AnchorPoint;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

fn text_style(highlighted: bool) -> MonoTextStyle<'static, BinaryColor> {
    let color = if highlighted {
        BinaryColor::Off
    } else {
        BinaryColor::On
    };
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(color)
        .build()
}

fn alignment(align: HAlign) -> Alignment {
    match align {
        HAlign::Left => Alignment::Left,
        HAlign::Center => Alignment::Center,
        HAlign::Right => Alignment::Right,
    }
}

/// Draw the whole render; the target is not cleared first.
pub fn draw<D>(render: &Render, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let area = target.bounding_box();
    draw_field(&render.title, area, target)?;
    for field in &render.fields {
        draw_field(field, area, target)?;
    }
    Ok(())
}

fn draw_field<D>(field: &TextField, area: Rectangle, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let (anchor, baseline) = match field.placement.anchor {
        Anchor::TopCenter => (
            area.anchor_point(AnchorPoint::TopCenter) + Point::new(0, PADDING_V_PX),
            Baseline::Top,
        ),
        Anchor::Center => (area.center(), Baseline::Middle),
    };
    let position = anchor + Point::new(field.placement.dx, 0);

    let style = TextStyleBuilder::new()
        .alignment(alignment(field.placement.align))
        .baseline(baseline)
        .build();
    let text = Text::with_text_style(
        field.text.as_str(),
        position,
        text_style(field.highlighted),
        style,
    );

    if field.highlighted {
        let bounds = text.bounding_box();
        let padded = Rectangle::new(
            bounds.top_left - Point::new(PADDING_H_PX, PADDING_V_PX),
            bounds.size + Size::new(2 * PADDING_H_PX as u32, 2 * PADDING_V_PX as u32),
        );
        padded
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(target)?;
    }

    text.draw(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::{Placement, TextField};
    use embedded_graphics::mock_display::MockDisplay;

    fn display() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    fn lit(display: &MockDisplay<BinaryColor>) -> usize {
        let size = display.size();
        (0..size.height as i32)
            .flat_map(|y| (0..size.width as i32).map(move |x| Point::new(x, y)))
            .filter(|&p| display.get_pixel(p) == Some(BinaryColor::On))
            .count()
    }

    #[test]
    fn title_is_drawn_in_top_rows() {
        let mut d = display();
        draw(&Render::new("Menu"), &mut d).unwrap();
        let top_lit = (0..64)
            .flat_map(|x| (0..12).map(move |y| Point::new(x, y)))
            .filter(|&p| d.get_pixel(p) == Some(BinaryColor::On))
            .count();
        assert!(top_lit > 0);
        assert_eq!(d.get_pixel(Point::new(32, 50)), None);
    }

    fn highlighted_box(dx: i32, align: HAlign) -> (Rectangle, Point) {
        let mut d = display();
        let field = TextField::new("12", Placement::centered(dx, align)).highlighted(true);
        let area = d.bounding_box();
        draw_field(&field, area, &mut d).unwrap();
        (d.affected_area(), area.center() + Point::new(dx, 0))
    }

    #[test]
    fn right_aligned_field_ends_at_anchor() {
        let (drawn, anchor) = highlighted_box(10, HAlign::Right);
        let right = drawn.top_left.x + drawn.size.width as i32 - 1;
        assert!((right - (anchor.x + PADDING_H_PX)).abs() <= 1);
        assert!(drawn.top_left.x < anchor.x);
        assert!(drawn.top_left.y < anchor.y);
        assert!(drawn.top_left.y + drawn.size.height as i32 > anchor.y);
    }

    #[test]
    fn left_aligned_field_starts_at_anchor() {
        let (drawn, anchor) = highlighted_box(-10, HAlign::Left);
        assert!((drawn.top_left.x - (anchor.x - PADDING_H_PX)).abs() <= 1);
        assert!(drawn.top_left.x + drawn.size.width as i32 - 1 > anchor.x);
    }

    #[test]
    fn center_aligned_field_straddles_anchor() {
        let (drawn, anchor) = highlighted_box(5, HAlign::Center);
        let left = drawn.top_left.x;
        let right = left + drawn.size.width as i32 - 1;
        assert!(((anchor.x - left) - (right - anchor.x)).abs() <= 1);
    }

    #[test]
    fn highlight_fills_background() {
        let plain = Render::single("", TextField::new("12", Placement::VALUE));
        let inverted = Render::single("", TextField::new("12", Placement::VALUE).highlighted(true));

        let mut a = display();
        draw(&plain, &mut a).unwrap();
        let mut b = display();
        draw(&inverted, &mut b).unwrap();

        // The inverted box lights the padding around the glyphs as well.
        assert!(lit(&b) > lit(&a));
    }
}
