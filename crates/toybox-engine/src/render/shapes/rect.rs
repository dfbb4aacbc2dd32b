use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::points::Point;
use crate::scene::{DrawCmd, DrawList};

/// Instanced renderer for solid rectangles and point batches.
///
/// Every `DrawCmd::Rect` and every point of a `DrawCmd::Points` becomes one
/// quad instance, so a frame goes out in a single draw call however many
/// points the canvas holds. Geometry is in logical pixels; colors are
/// premultiplied.
#[derive(Default)]
pub struct RectRenderer {
    pipeline: Option<Pipeline>,
    instance_buffer: Option<InstanceBuffer>,
    /// Reused between frames.
    instances: Vec<RectInstance>,
}

impl RectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
    ) {
        collect_instances(draw_list, &mut self.instances);
        self.draw_instances(ctx, target);
    }

    /// Draws a borrowed point batch as `size`-pixel squares, skipping the
    /// draw list. For large batches owned elsewhere, such as a paint canvas.
    pub fn render_points(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        size: f32,
        points: &[Point],
    ) {
        self.instances.clear();
        push_point_instances(&mut self.instances, size, points);
        self.draw_instances(ctx, target);
    }

    fn draw_instances(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if self.instances.is_empty() {
            return;
        }

        if self.pipeline.as_ref().map(|p| p.format) != Some(ctx.surface_format) {
            log::debug!("building rect pipeline for {:?}", ctx.surface_format);
            self.pipeline = Some(Pipeline::new(ctx));
        }
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        if self.instance_buffer.as_ref().is_some_and(|b| b.capacity < self.instances.len()) {
            self.instance_buffer = None;
        }
        let instances = self
            .instance_buffer
            .get_or_insert_with(|| InstanceBuffer::new(ctx.device, self.instances.len()));

        let globals = Globals { viewport: ctx.viewport.extent(), _pad: [0.0; 2] };
        ctx.queue.write_buffer(&pipeline.globals, 0, bytemuck::bytes_of(&globals));
        ctx.queue.write_buffer(&instances.buffer, 0, bytemuck::cast_slice(&self.instances));

        let mut pass = target.begin_pass("toybox rect pass", None);
        pass.set_pipeline(&pipeline.pipeline);
        pass.set_bind_group(0, &pipeline.bind_group, &[]);
        pass.set_vertex_buffer(0, instances.buffer.slice(..));
        pass.draw(0..4, 0..self.instances.len() as u32);
    }
}

/// GPU objects that depend only on the surface format.
struct Pipeline {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    globals: wgpu::Buffer,
}

impl Pipeline {
    fn new(ctx: &RenderCtx<'_>) -> Self {
        let device = ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("toybox rect shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/rect.wgsl").into()),
        });

        let globals = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("toybox rect globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("toybox rect bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<Globals>() as u64),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("toybox rect bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals.as_entire_binding(),
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("toybox rect pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("toybox rect pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[RectInstance::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Self {
            format: ctx.surface_format,
            pipeline,
            bind_group,
            globals,
        }
    }
}

struct InstanceBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
}

impl InstanceBuffer {
    fn new(device: &wgpu::Device, needed: usize) -> Self {
        let capacity = needed.next_power_of_two().max(256);
        log::debug!("allocating rect instance buffer for {capacity} instances");

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("toybox rect instances"),
            size: (capacity * std::mem::size_of::<RectInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self { buffer, capacity }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct Globals {
    viewport: [f32; 2],
    _pad: [f32; 2], // uniforms are 16-byte aligned
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct RectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Flattens the draw list into quad instances, in paint order.
fn collect_instances(draw_list: &DrawList, out: &mut Vec<RectInstance>) {
    out.clear();

    for item in draw_list.items() {
        match &item.cmd {
            DrawCmd::Rect(cmd) => {
                let r = cmd.rect.normalized();
                if r.is_empty() {
                    continue;
                }
                out.push(RectInstance {
                    origin: [r.origin.x, r.origin.y],
                    size: [r.size.x, r.size.y],
                    color: cmd.color.to_array(),
                });
            }
            DrawCmd::Points(cmd) => push_point_instances(out, cmd.size, &cmd.points),
        }
    }
}

fn push_point_instances(out: &mut Vec<RectInstance>, size: f32, points: &[Point]) {
    if size <= 0.0 {
        return;
    }
    out.extend(points.iter().map(|p| RectInstance {
        origin: [p.pos.x, p.pos.y],
        size: [size; 2],
        color: p.color.to_array(),
    }));
}
