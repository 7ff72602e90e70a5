/// Mock graphics device for unit tests (no GPU required)
///
/// The mock records every command as a string so the pipeline stages can be
/// tested for ordering invariants (bind/release pairing, texture units, draw
/// sequencing) without a real backend. It also enforces the aliasing rule:
/// a texture attached to the currently bound framebuffer cannot be bound as
/// a sampled input.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::render_bail;
use super::{
    Buffer, BufferDesc, BufferKind, ClearFlags, CommandList, Framebuffer, FramebufferDesc,
    GraphicsDevice, Program, ProgramDesc, Texture, TextureDesc, TextureInfo, UniformValue,
    Viewport,
};

/// Stable identity tag for a texture, usable in recorded command strings.
///
/// Two clones of the same `Arc` produce the same tag.
pub fn texture_tag(texture: &Arc<dyn Texture>) -> usize {
    Arc::as_ptr(texture) as *const () as usize
}

/// Stable identity tag for a framebuffer.
pub fn framebuffer_tag(framebuffer: &Arc<dyn Framebuffer>) -> usize {
    Arc::as_ptr(framebuffer) as *const () as usize
}

// ============================================================================
// Mock resources
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

#[derive(Debug)]
pub struct MockBuffer {
    pub kind: BufferKind,
    pub len: u64,
}

impl Buffer for MockBuffer {
    fn kind(&self) -> BufferKind {
        self.kind
    }

    fn len(&self) -> u64 {
        self.len
    }
}

#[derive(Debug)]
pub struct MockProgram {
    pub label: String,
}

impl Program for MockProgram {
    fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug)]
pub struct MockFramebuffer {
    pub width: u32,
    pub height: u32,
    pub color_count: usize,
}

impl Framebuffer for MockFramebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_attachment_count(&self) -> usize {
        self.color_count
    }
}

// ============================================================================
// Mock command list
// ============================================================================

/// Command list that records every call as a string
pub struct MockCommandList {
    /// Recorded commands, in call order
    pub commands: Vec<String>,
    /// Attachment tags per framebuffer tag (shared with the device)
    attachments: Arc<Mutex<FxHashMap<usize, Vec<usize>>>>,
    /// Attachment tags of the currently bound framebuffer (empty = default surface)
    bound_attachments: Vec<usize>,
}

impl MockCommandList {
    fn new(attachments: Arc<Mutex<FxHashMap<usize, Vec<usize>>>>) -> Self {
        Self {
            commands: Vec::new(),
            attachments,
            bound_attachments: Vec::new(),
        }
    }
}

impl CommandList for MockCommandList {
    fn begin(&mut self) -> Result<()> {
        self.commands.push("begin".to_string());
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.commands.push("end".to_string());
        Ok(())
    }

    fn bind_framebuffer(&mut self, framebuffer: &Arc<dyn Framebuffer>) -> Result<()> {
        let tag = framebuffer_tag(framebuffer);
        self.bound_attachments = self
            .attachments
            .lock()
            .unwrap()
            .get(&tag)
            .cloned()
            .unwrap_or_default();
        self.commands.push(format!("bind_framebuffer fb={}", tag));
        Ok(())
    }

    fn bind_default_framebuffer(&mut self) -> Result<()> {
        self.bound_attachments.clear();
        self.commands.push("bind_default_framebuffer".to_string());
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.commands.push(format!(
            "set_viewport {}x{}",
            viewport.width as u32, viewport.height as u32
        ));
        Ok(())
    }

    fn clear(&mut self, flags: ClearFlags, _color: [f32; 4]) -> Result<()> {
        self.commands.push(format!("clear {:?}", flags));
        Ok(())
    }

    fn set_depth_test(&mut self, enabled: bool) -> Result<()> {
        self.commands.push(format!("set_depth_test {}", enabled));
        Ok(())
    }

    fn bind_program(&mut self, program: &Arc<dyn Program>) -> Result<()> {
        self.commands.push(format!("bind_program {}", program.label()));
        Ok(())
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        self.commands.push(format!("set_uniform {} = {:?}", name, value));
        Ok(())
    }

    fn bind_texture(&mut self, unit: u32, texture: &Arc<dyn Texture>) -> Result<()> {
        let tag = texture_tag(texture);
        if self.bound_attachments.contains(&tag) {
            render_bail!("lumen::MockDevice", InvalidResource,
                "texture {} is an attachment of the bound framebuffer and cannot be sampled",
                tag);
        }
        self.commands.push(format!("bind_texture unit={} tex={}", unit, tag));
        Ok(())
    }

    fn bind_vertex_buffer(&mut self, _buffer: &Arc<dyn Buffer>) -> Result<()> {
        self.commands.push("bind_vertex_buffer".to_string());
        Ok(())
    }

    fn bind_index_buffer(&mut self, _buffer: &Arc<dyn Buffer>) -> Result<()> {
        self.commands.push("bind_index_buffer".to_string());
        Ok(())
    }

    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<()> {
        self.commands.push(format!("draw {} {}", vertex_count, first_vertex));
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: u32, first_index: u32) -> Result<()> {
        self.commands.push(format!("draw_indexed {} {}", index_count, first_index));
        Ok(())
    }
}

// ============================================================================
// Mock device
// ============================================================================

/// Mock device that tracks created resources without a GPU
pub struct MockDevice {
    /// Descriptions of created textures, in creation order
    pub created_textures: Vec<String>,
    /// Descriptions of created buffers
    pub created_buffers: Vec<String>,
    /// Labels of created programs
    pub created_programs: Vec<String>,
    /// Labels of created framebuffers
    pub created_framebuffers: Vec<String>,
    /// Attachment tags per framebuffer tag, shared with command lists
    attachments: Arc<Mutex<FxHashMap<usize, Vec<usize>>>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            created_textures: Vec::new(),
            created_buffers: Vec::new(),
            created_programs: Vec::new(),
            created_framebuffers: Vec::new(),
            attachments: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Like `create_command_list` but returns the concrete type, so tests can
    /// inspect `commands` after recording.
    pub fn record(&self) -> MockCommandList {
        MockCommandList::new(Arc::clone(&self.attachments))
    }
}

impl GraphicsDevice for MockDevice {
    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Arc<dyn Texture>> {
        self.created_textures.push(format!(
            "texture {}x{} {:?} {:?}",
            desc.width, desc.height, desc.format, desc.usage
        ));
        Ok(Arc::new(MockTexture {
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                usage: desc.usage,
            },
        }))
    }

    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Arc<dyn Buffer>> {
        self.created_buffers.push(format!("buffer {:?} {}", desc.kind, desc.data.len()));
        Ok(Arc::new(MockBuffer {
            kind: desc.kind,
            len: desc.data.len() as u64,
        }))
    }

    fn create_program(&mut self, desc: &ProgramDesc) -> Result<Arc<dyn Program>> {
        self.created_programs.push(desc.label.clone());
        Ok(Arc::new(MockProgram {
            label: desc.label.clone(),
        }))
    }

    fn create_framebuffer(&mut self, desc: &FramebufferDesc) -> Result<Arc<dyn Framebuffer>> {
        if desc.color_attachments.is_empty() {
            render_bail!("lumen::MockDevice", IncompleteTarget,
                "framebuffer '{}' has no color attachments", desc.label);
        }
        for (i, attachment) in desc.color_attachments.iter().enumerate() {
            let info = attachment.info();
            if info.width != desc.width || info.height != desc.height {
                render_bail!("lumen::MockDevice", IncompleteTarget,
                    "framebuffer '{}' attachment {} is {}x{}, expected {}x{}",
                    desc.label, i, info.width, info.height, desc.width, desc.height);
            }
            if !info.format.is_color() {
                render_bail!("lumen::MockDevice", IncompleteTarget,
                    "framebuffer '{}' attachment {} has non-color format {:?}",
                    desc.label, i, info.format);
            }
        }
        if let Some(format) = desc.depth_stencil {
            if !format.is_depth_stencil() {
                render_bail!("lumen::MockDevice", IncompleteTarget,
                    "framebuffer '{}' depth/stencil format {:?} is not a depth format",
                    desc.label, format);
            }
        }

        let framebuffer: Arc<dyn Framebuffer> = Arc::new(MockFramebuffer {
            width: desc.width,
            height: desc.height,
            color_count: desc.color_attachments.len(),
        });
        let tags = desc.color_attachments.iter().map(texture_tag).collect();
        self.attachments
            .lock()
            .unwrap()
            .insert(framebuffer_tag(&framebuffer), tags);
        self.created_framebuffers.push(desc.label.clone());
        Ok(framebuffer)
    }

    fn create_command_list(&self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(MockCommandList::new(Arc::clone(&self.attachments))))
    }

    fn submit(&mut self, _commands: &dyn CommandList) -> Result<()> {
        Ok(())
    }

    fn wait_idle(&self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;
