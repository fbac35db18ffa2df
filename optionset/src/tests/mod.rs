mod bits;
mod macros;

crate::flags! {
    /// Test universe. Note that `Ee` is not a power of two.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) enum Enum: u32 {
        None = 0,
        Foo = 1,
        Foos = 2,
        Fooz = 4,
        A = 8,
        B = 16,
        C = 32,
        D = 64,
        E = 128,
        Ee = 265,
        F = 512,
        G = 1024,
        H = 2048,
        I = 4096,
        J = 8192,
    }
}

/// A flag which is whatever raw value it was constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Raw(pub(crate) u64);

impl crate::Flag for Raw {
    type Bits = u64;

    fn raw_value(&self) -> u64 {
        self.0
    }

    fn from_raw(raw: u64) -> Self {
        Raw(raw)
    }
}
