pub mod png_io;

pub use png_io::{
    decode_color_png, decode_depth_png, encode_png, flat_depth, load_color_png, load_depth_png,
    save_png,
};
