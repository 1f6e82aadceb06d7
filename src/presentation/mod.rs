// Presentation layer - Rendering adapters
pub mod pointer;
pub mod svg;
