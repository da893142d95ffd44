//! # Sheet Module
//!
//! Lays labeled thumbnails out on fixed-size grid pages.
//!
//! Every page holds exactly `cols * rows` cells; the paginator pads the
//! final page with blank white cells so the grid geometry never changes.
//! Labels sit at the top of each cell, horizontally centered against the
//! thumbnail using the measured text width.

mod font;

pub use font::LabelFont;

use image::{imageops, Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// Label text size in pixels for scalable fonts
pub const LABEL_TEXT_SIZE: f32 = 14.0;

/// Grid geometry of a contact sheet page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Cells per row
    pub cols: u32,
    /// Rows per page
    pub rows: u32,
    /// Gap around and between cells, in pixels
    pub margin: u32,
    /// Height of the label band above each thumbnail
    pub label_height: u32,
    /// Thumbnail width
    pub thumb_width: u32,
    /// Thumbnail height
    pub thumb_height: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 5,
            margin: 20,
            label_height: 20,
            thumb_width: 200,
            thumb_height: 150,
        }
    }
}

impl SheetLayout {
    /// Cells per page
    pub fn capacity(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    /// Page canvas width in pixels
    pub fn sheet_width(&self) -> u32 {
        self.cols * self.thumb_width + (self.cols + 1) * self.margin
    }

    /// Page canvas height in pixels
    pub fn sheet_height(&self) -> u32 {
        self.rows * (self.label_height + self.thumb_height) + (self.rows + 1) * self.margin
    }

    /// Top-left corner of cell `(row, col)`
    pub fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        (
            self.margin + col * (self.thumb_width + self.margin),
            self.margin + row * (self.label_height + self.thumb_height + self.margin),
        )
    }
}

/// One grid cell: a padded thumbnail and its label
pub struct SheetCell {
    /// Fixed-size RGB thumbnail bitmap
    pub thumbnail: RgbImage,
    /// Formatted date, "No date", or "" for padding cells
    pub label: String,
}

impl SheetCell {
    /// Blank white padding cell with an empty label
    pub fn blank(layout: &SheetLayout) -> Self {
        Self {
            thumbnail: RgbImage::from_pixel(
                layout.thumb_width,
                layout.thumb_height,
                Rgb([255, 255, 255]),
            ),
            label: String::new(),
        }
    }
}

/// Split cells into pages of exactly `capacity` cells
///
/// The final page is padded with blank cells. An empty input produces no
/// pages.
pub fn paginate(cells: Vec<SheetCell>, layout: &SheetLayout) -> Vec<Vec<SheetCell>> {
    let capacity = layout.capacity();
    let mut pages = Vec::new();
    let mut current = Vec::with_capacity(capacity);

    for cell in cells {
        current.push(cell);
        if current.len() == capacity {
            pages.push(std::mem::replace(&mut current, Vec::with_capacity(capacity)));
        }
    }

    if !current.is_empty() {
        while current.len() < capacity {
            current.push(SheetCell::blank(layout));
        }
        pages.push(current);
    }

    pages
}

/// Render one page of cells onto a white canvas
pub fn render_page(cells: &[SheetCell], layout: &SheetLayout, font: &LabelFont) -> RgbImage {
    debug_assert!(cells.len() <= layout.capacity());

    let mut canvas = RgbImage::from_pixel(
        layout.sheet_width(),
        layout.sheet_height(),
        Rgb([255, 255, 255]),
    );

    for (index, cell) in cells.iter().enumerate() {
        let row = index as u32 / layout.cols;
        let col = index as u32 % layout.cols;
        let (x, y) = layout.cell_origin(row, col);

        if !cell.label.is_empty() {
            let text_width = font.text_width(&cell.label, LABEL_TEXT_SIZE);
            let text_x = x as i32 + (layout.thumb_width as i32 - text_width as i32) / 2;
            font.draw(
                &mut canvas,
                &cell.label,
                text_x,
                y as i32,
                LABEL_TEXT_SIZE,
                Rgb([0, 0, 0]),
            );
        }

        imageops::replace(
            &mut canvas,
            &cell.thumbnail,
            x as i64,
            (y + layout.label_height) as i64,
        );
    }

    canvas
}
