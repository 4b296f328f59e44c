mod ring_renderer;

pub use ring_renderer::ring_renderer_task;
