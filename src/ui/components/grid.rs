// SPDX-License-Identifier: MPL-2.0
use iced::widget::{Column, Row, Space};
use iced::{Element, Length};

/// Lays `items` out in rows of `columns` equal-width cells.
///
/// The last row is padded with empty cells so every cell keeps the same
/// width.
pub fn grid<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
    spacing: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut grid = Column::new().spacing(spacing).width(Length::Fill);
    let mut row = Row::new().spacing(spacing).width(Length::Fill);
    let mut filled = 0;

    for item in items {
        row = row.push(
            iced::widget::container(item).width(Length::FillPortion(1)),
        );
        filled += 1;
        if filled == columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing).width(Length::Fill);
            filled = 0;
        }
    }

    if filled > 0 {
        for _ in filled..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;

    #[test]
    fn grid_builds_with_partial_last_row() {
        let items: Vec<Element<'_, ()>> = (0..5).map(|i| text(i.to_string()).into()).collect();
        let _element = grid(items, 3, 8.0);
    }

    #[test]
    fn zero_columns_is_treated_as_one() {
        let items: Vec<Element<'_, ()>> = vec![text("a").into()];
        let _element = grid(items, 0, 8.0);
    }
}
