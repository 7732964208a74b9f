//! The host boundary: one render request in, one image out.
//!
//! The host sends the property and symbol text with an image request and a
//! resolver handle. A [`Client`] turns the decoded [`Config`] into a
//! [`Builder`] that renders the image bytes.

mod codes;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{error, info};

pub use codes::{
    ColorSpace, ImageFormat, ReturnCode, describe_color_space, describe_image_format,
    describe_return_code,
};

use crate::Result;
use crate::config::Config;
use crate::options::Options;
use crate::resolver::Resolver;
use crate::twiplet::Twiplet;

/// Image parameters sent by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest {
    /// Preferred format; the builder may change it.
    pub format: ImageFormat,
    /// Preferred colour space; the builder may change it.
    pub color_space: ColorSpace,
    pub width: Twiplet,
    pub height: Twiplet,
    /// Resolution in dots per inch.
    pub resolution: i32,
}

/// Image bytes returned to the host, tagged with the format actually used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub format: ImageFormat,
    pub color_space: ColorSpace,
    pub data: Vec<u8>,
}

/// Creates a chart image.
pub trait Builder {
    /// Receives the preferred format and colour space, and may replace either.
    fn set_format(&mut self, format: &mut ImageFormat, color_space: &mut ColorSpace);

    fn set_size(&mut self, width: Twiplet, height: Twiplet, dpi: i32);

    /// Renders the image.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be drawn.
    fn render(&mut self) -> Result<Vec<u8>>;
}

/// Chooses the builder for a configuration.
pub trait Client {
    /// Returns `None` when the configuration is not supported.
    fn new_builder<'r>(&self, config: Config<'r>) -> Option<Box<dyn Builder + 'r>>;
}

/// Per-process context holding the client and its options.
#[derive(Debug)]
pub struct Host<C: Client> {
    client: C,
    options: Options,
}

impl<C: Client> Host<C> {
    pub const fn new(client: C, options: Options) -> Self {
        Self { client, options }
    }

    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Creates a chart image from the host's strings.
    ///
    /// A panic in the client or builder is caught here and reported as
    /// [`ReturnCode::Failed`].
    ///
    /// # Errors
    /// Returns the host return code describing the failure.
    pub fn create_image(
        &self,
        resolver: impl Resolver,
        properties: &str,
        symbols: &str,
        request: &ImageRequest,
    ) -> std::result::Result<RenderedImage, ReturnCode> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            self.render(resolver, properties, symbols, request)
        }))
        .unwrap_or_else(|payload| {
            error!(reason = panic_message(payload.as_ref()), "unexpected failure");
            Err(ReturnCode::Failed)
        })
    }

    fn render(
        &self,
        resolver: impl Resolver,
        properties: &str,
        symbols: &str,
        request: &ImageRequest,
    ) -> std::result::Result<RenderedImage, ReturnCode> {
        if self.options.log_info() {
            info!(
                width = request.width.0,
                height = request.height.0,
                dpi = request.resolution,
                format = %request.format,
                color_space = %request.color_space,
                "creating image\n[Properties]\n{properties}\n[Symbols]\n{symbols}"
            );
        }

        if request.width.0 == 0 || request.height.0 == 0 {
            error!("zero dimensions supplied");
            return Err(ReturnCode::InvalidValue);
        }

        let config = Config::new(resolver, properties, symbols);
        let Some(mut builder) = self.client.new_builder(config) else {
            error!("configuration not supported");
            return Err(ReturnCode::NotImplemented);
        };

        let mut format = request.format;
        let mut color_space = request.color_space;
        builder.set_format(&mut format, &mut color_space);
        builder.set_size(request.width, request.height, request.resolution);

        let data = builder.render().map_err(|err| {
            error!(error = %err, "error rendering chart");
            ReturnCode::Failed
        })?;

        if self.options.log_info() {
            info!(size = data.len(), %format, %color_space, "created image");
        }
        Ok(RenderedImage {
            format,
            color_space,
            data,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
