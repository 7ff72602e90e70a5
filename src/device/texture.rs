/// Texture trait, descriptor and sampling parameters

/// Pixel format of a texture or render target attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// 8-bit unsigned normalized per channel
    Rgba8Unorm,
    /// 16-bit float per channel (HDR intermediate targets)
    Rgba16Float,
    /// Combined 24-bit depth + 8-bit stencil
    Depth24Stencil8,
}

impl TextureFormat {
    /// Returns true if this format can back a color attachment
    pub fn is_color(self) -> bool {
        matches!(self, TextureFormat::Rgba8Unorm | TextureFormat::Rgba16Float)
    }

    /// Returns true if this format can back a depth/stencil attachment
    pub fn is_depth_stencil(self) -> bool {
        matches!(self, TextureFormat::Depth24Stencil8)
    }
}

/// Texture usage flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureUsage {
    /// Texture can be sampled in shaders
    Sampled,
    /// Texture can be used as render target
    RenderTarget,
    /// Texture can be used for both (offscreen attachments read by later stages)
    SampledAndRenderTarget,
    /// Texture can be used as depth/stencil attachment
    DepthStencil,
}

/// Minification/magnification filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Texture coordinate wrap behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    ClampToEdge,
    Repeat,
    MirroredRepeat,
}

/// Descriptor for creating a texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
    /// Filtering for minification and magnification
    pub filter: FilterMode,
    /// Wrap behavior on both axes
    pub wrap: WrapMode,
    /// Optional initial pixel data (tightly packed, row-major)
    pub data: Option<Vec<u8>>,
}

/// Read-only properties of a created texture.
///
/// Returned by `Texture::info()` to query texture properties without exposing
/// backend-specific details.
#[derive(Debug, Clone)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
}

/// Texture resource trait
///
/// Implemented by backend-specific texture types. The GPU memory is released
/// when the last reference is dropped (deterministic, no garbage collection).
pub trait Texture: Send + Sync {
    /// Get the read-only properties of this texture
    fn info(&self) -> &TextureInfo;
}
