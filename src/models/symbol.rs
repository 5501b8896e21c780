use super::BitMatrix;
use crate::error::EncodeError;

/// State of a single module while a symbol is under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet written
    #[default]
    Unset,
    /// Dark module
    Dark,
    /// Light module
    Light,
}

impl Module {
    /// Module for a boolean value (`true` = dark)
    pub fn from_dark(dark: bool) -> Self {
        if dark { Module::Dark } else { Module::Light }
    }

    /// Whether the module is dark (unset reads as light)
    pub fn is_dark(&self) -> bool {
        matches!(self, Module::Dark)
    }

    /// Swap dark and light, leaving unset modules untouched
    pub fn flipped(self) -> Self {
        match self {
            Module::Dark => Module::Light,
            Module::Light => Module::Dark,
            Module::Unset => Module::Unset,
        }
    }
}

/// Working symbol grid: module values plus a parallel reserved map.
///
/// Reserved cells hold function patterns, format and version information.
/// Everything else belongs to the data placer and the mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatrix {
    size: usize,
    modules: Vec<Module>,
    reserved: BitMatrix,
}

impl SymbolMatrix {
    /// Create a `size` x `size` grid with every cell unset and unreserved
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![Module::Unset; size * size],
            reserved: BitMatrix::square(size),
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Module {
        self.modules[y * self.size + x]
    }

    /// Whether the module at (x, y) is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_dark()
    }

    /// Whether (x, y) belongs to a function pattern or information area
    pub fn is_reserved(&self, x: usize, y: usize) -> bool {
        self.reserved.get(x, y)
    }

    /// Write a function module and reserve it.
    ///
    /// Cells already reserved by an earlier pattern keep their value.
    pub fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        if x >= self.size || y >= self.size || self.reserved.get(x, y) {
            return;
        }
        self.modules[y * self.size + x] = Module::from_dark(dark);
        self.reserved.set(x, y, true);
    }

    /// Reserve a cell whose value is written later (format information)
    pub fn reserve(&mut self, x: usize, y: usize) {
        if x < self.size && y < self.size {
            self.reserved.set(x, y, true);
        }
    }

    /// Overwrite the value of a reserved information module
    pub fn write_reserved(&mut self, x: usize, y: usize, dark: bool) {
        debug_assert!(self.is_reserved(x, y));
        self.modules[y * self.size + x] = Module::from_dark(dark);
    }

    /// Write a data module (never touches reserved cells)
    pub fn set_data(&mut self, x: usize, y: usize, dark: bool) {
        if !self.reserved.get(x, y) {
            self.modules[y * self.size + x] = Module::from_dark(dark);
        }
    }

    /// Flip a data module; reserved cells are left alone
    pub fn flip_data(&mut self, x: usize, y: usize) {
        if !self.reserved.get(x, y) {
            let idx = y * self.size + x;
            self.modules[idx] = self.modules[idx].flipped();
        }
    }

    /// Number of cells available to data and error correction bits
    pub fn unreserved_count(&self) -> usize {
        self.size * self.size - self.reserved.count_ones()
    }

    /// Number of dark modules in the whole grid
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_dark()).count()
    }

    /// Freeze into the output bit matrix, failing on any unwritten cell
    pub fn to_bit_matrix(&self) -> Result<BitMatrix, EncodeError> {
        let mut out = BitMatrix::square(self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                match self.get(x, y) {
                    Module::Unset => return Err(EncodeError::UnwrittenModule { x, y }),
                    Module::Dark => out.set(x, y, true),
                    Module::Light => {}
                }
            }
        }
        Ok(out)
    }
}
