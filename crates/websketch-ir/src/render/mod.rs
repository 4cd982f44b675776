//! Text renderers over a capture tree: wireframe, structure mode, legend.

mod grid;
mod wireframe;

pub use wireframe::{
    generate_legend, render_ascii, render_for_llm, render_structure, RenderOptions,
};
