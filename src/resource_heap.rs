//! Descriptors for groups of shader resources.
//!
//! A resource heap groups the buffers, textures and samplers that a shader pipeline reads from.
//! With modern graphics APIs (Vulkan, Direct3D 12, WebGPU) such a group is the only way to bind resources to a pipeline.
//! The descriptors here only describe the group:
//! binding slots are assigned by position, starting at zero.

/// The type of a shader resource.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum ResourceType {
	/// Constant buffer (also known as uniform buffer).
	#[default]
	ConstantBuffer,

	/// Storage buffer that shaders can read and write.
	StorageBuffer,

	/// Sampled texture.
	Texture,

	/// Sampler state.
	Sampler,
}

impl ResourceType {
	/// Get the layout binding type for this resource type.
	///
	/// Textures are described as filterable 2D float textures and samplers as filtering samplers.
	pub fn binding_type(self) -> wgpu::BindingType {
		match self {
			Self::ConstantBuffer => wgpu::BindingType::Buffer {
				ty: wgpu::BufferBindingType::Uniform,
				has_dynamic_offset: false,
				min_binding_size: None,
			},
			Self::StorageBuffer => wgpu::BindingType::Buffer {
				ty: wgpu::BufferBindingType::Storage { read_only: false },
				has_dynamic_offset: false,
				min_binding_size: None,
			},
			Self::Texture => wgpu::BindingType::Texture {
				sample_type: wgpu::TextureSampleType::Float { filterable: true },
				view_dimension: wgpu::TextureViewDimension::D2,
				multisampled: false,
			},
			Self::Sampler => wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
		}
	}

	/// Check if the resource type is a buffer.
	pub fn is_buffer(self) -> bool {
		matches!(self, Self::ConstantBuffer | Self::StorageBuffer)
	}
}

/// A reference to a single shader resource.
#[derive(Debug, Clone, Copy)]
pub enum ResourceView<'a> {
	/// A buffer bound as constant buffer.
	ConstantBuffer(&'a wgpu::Buffer),

	/// A buffer bound as storage buffer.
	StorageBuffer(&'a wgpu::Buffer),

	/// A view of a texture.
	Texture(&'a wgpu::TextureView),

	/// A sampler.
	Sampler(&'a wgpu::Sampler),
}

impl<'a> ResourceView<'a> {
	/// Get the type of the referenced resource.
	pub fn resource_type(&self) -> ResourceType {
		match self {
			Self::ConstantBuffer(_) => ResourceType::ConstantBuffer,
			Self::StorageBuffer(_) => ResourceType::StorageBuffer,
			Self::Texture(_) => ResourceType::Texture,
			Self::Sampler(_) => ResourceType::Sampler,
		}
	}

	/// Get the resource as bind group resource.
	///
	/// Buffers are bound in their entirety.
	pub fn binding_resource(&self) -> wgpu::BindingResource<'a> {
		match *self {
			Self::ConstantBuffer(buffer) => buffer.as_entire_binding(),
			Self::StorageBuffer(buffer) => buffer.as_entire_binding(),
			Self::Texture(view) => wgpu::BindingResource::TextureView(view),
			Self::Sampler(sampler) => wgpu::BindingResource::Sampler(sampler),
		}
	}
}

/// Description of a resource heap.
#[derive(Debug, Clone, Default)]
pub struct ResourceHeapDescriptor<'a> {
	/// The layout the resources are bound for.
	pub pipeline_layout: Option<&'a wgpu::BindGroupLayout>,

	/// The resources, in binding order.
	pub resource_views: Vec<ResourceView<'a>>,
}

impl<'a> ResourceHeapDescriptor<'a> {
	/// Create an empty descriptor without pipeline layout.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the pipeline layout.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn with_pipeline_layout(mut self, pipeline_layout: &'a wgpu::BindGroupLayout) -> Self {
		self.pipeline_layout = Some(pipeline_layout);
		self
	}

	/// Append a resource in the next binding slot.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn push(mut self, view: ResourceView<'a>) -> Self {
		self.resource_views.push(view);
		self
	}

	/// Get the types of all resources, in binding order.
	pub fn resource_types(&self) -> Vec<ResourceType> {
		self.resource_views.iter().map(|view| view.resource_type()).collect()
	}

	/// Get the layout entries that describe this heap.
	pub fn layout_entries(&self, visibility: wgpu::ShaderStages) -> Vec<wgpu::BindGroupLayoutEntry> {
		layout_entries(&self.resource_types(), visibility)
	}

	/// Get the bind group entries for all resources.
	pub fn bind_group_entries(&self) -> Vec<wgpu::BindGroupEntry<'a>> {
		self.resource_views.iter()
			.enumerate()
			.map(|(binding, view)| wgpu::BindGroupEntry {
				binding: binding_index(binding),
				resource: view.binding_resource(),
			})
			.collect()
	}
}

/// Get layout entries for a list of resource types.
///
/// Each resource is assigned the binding slot equal to its index.
pub fn layout_entries(types: &[ResourceType], visibility: wgpu::ShaderStages) -> Vec<wgpu::BindGroupLayoutEntry> {
	types.iter()
		.enumerate()
		.map(|(binding, ty)| wgpu::BindGroupLayoutEntry {
			binding: binding_index(binding),
			visibility,
			ty: ty.binding_type(),
			count: None,
		})
		.collect()
}

fn binding_index(index: usize) -> u32 {
	u32::try_from(index).unwrap_or(u32::MAX)
}
