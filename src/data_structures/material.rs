//! Display state for flowers.
//!
//! The host renderer owns shaders and bind groups; a `Material` only records
//! the values it should upload. Each parameter gets a typed setter instead of
//! a string-keyed lookup, and a `dirty` flag tells the host when to re-upload.

/// Linear RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[derive(Clone, Debug)]
pub struct Material {
    pub name: String,
    base_color: Color,
    dirty: bool,
}

impl Material {
    pub fn new(name: impl Into<String>, base_color: Color) -> Self {
        Self {
            name: name.into(),
            base_color,
            dirty: true,
        }
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    pub fn set_base_color(&mut self, color: Color) {
        if self.base_color != color {
            self.base_color = color;
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the raw upload data and clears the dirty flag.
    pub fn take_raw(&mut self) -> MaterialRaw {
        self.dirty = false;
        self.to_raw()
    }

    pub fn to_raw(&self) -> MaterialRaw {
        MaterialRaw {
            base_color: self.base_color.into(),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new("default", Color::WHITE)
    }
}

/**
 * The raw material is what the host writes into its uniform buffer.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialRaw {
    base_color: [f32; 4],
}

impl MaterialRaw {
    pub fn base_color(&self) -> [f32; 4] {
        self.base_color
    }
}
