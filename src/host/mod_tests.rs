use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::PicError;
use crate::options::LogLevel;
use crate::resolver::TableResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Echo,
    Unsupported,
    FailRender,
    PanicRender,
    PanicBuilder,
}

#[derive(Debug)]
struct MockClient {
    mode: Mode,
    sizes: SizeLog,
}

type SizeLog = Rc<RefCell<Vec<(Twiplet, Twiplet, i32)>>>;

impl MockClient {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            sizes: SizeLog::default(),
        }
    }
}

struct MockBuilder<'r> {
    config: Config<'r>,
    mode: Mode,
    sizes: SizeLog,
}

impl Builder for MockBuilder<'_> {
    fn set_format(&mut self, format: &mut ImageFormat, color_space: &mut ColorSpace) {
        if *format == ImageFormat::Bmp {
            *format = ImageFormat::Png;
        }
        if *color_space == ColorSpace::Named {
            *color_space = ColorSpace::Rgb;
        }
    }

    fn set_size(&mut self, width: Twiplet, height: Twiplet, dpi: i32) {
        self.sizes.borrow_mut().push((width, height, dpi));
    }

    fn render(&mut self) -> Result<Vec<u8>> {
        match self.mode {
            Mode::FailRender => Err(PicError::Render("no backend".to_string())),
            Mode::PanicRender => panic!("backend exploded"),
            _ => Ok(self.config.name().into_bytes()),
        }
    }
}

impl Client for MockClient {
    fn new_builder<'r>(&self, config: Config<'r>) -> Option<Box<dyn Builder + 'r>> {
        match self.mode {
            Mode::Unsupported => None,
            Mode::PanicBuilder => panic!("client exploded"),
            _ => Some(Box::new(MockBuilder {
                config,
                mode: self.mode,
                sizes: Rc::clone(&self.sizes),
            })),
        }
    }
}

fn request() -> ImageRequest {
    ImageRequest {
        format: ImageFormat::Svg,
        color_space: ColorSpace::Cmyk,
        width: Twiplet(144_000),
        height: Twiplet(72_000),
        resolution: 96,
    }
}

fn host(mode: Mode) -> Host<MockClient> {
    Host::new(MockClient::new(mode), Options::default())
}

#[test]
fn creates_image() {
    let host = host(Mode::Echo);
    let image = host
        .create_image(TableResolver::default(), "config=Bar", "", &request())
        .unwrap();
    assert_eq!(image.data, b"Bar");
    assert_eq!(image.format, ImageFormat::Svg);
    assert_eq!(image.color_space, ColorSpace::Cmyk);
    assert_eq!(
        *host.client().sizes.borrow(),
        [(Twiplet(144_000), Twiplet(72_000), 96)]
    );
}

#[test]
fn builder_may_change_format() {
    let mut req = request();
    req.format = ImageFormat::Bmp;
    req.color_space = ColorSpace::Named;
    let image = host(Mode::Echo)
        .create_image(TableResolver::default(), "", "", &req)
        .unwrap();
    assert_eq!(image.format, ImageFormat::Png);
    assert_eq!(image.color_space, ColorSpace::Rgb);
    assert!(image.data.is_empty());
}

#[test]
fn symbols_reach_the_builder() {
    let props = format!("config={}name", crate::ascii::DLE);
    let image = host(Mode::Echo)
        .create_image(TableResolver::default(), &props, "name=Pie", &request())
        .unwrap();
    assert_eq!(image.data, b"Pie");
}

#[test]
fn zero_dimensions_are_invalid() {
    let host = host(Mode::Echo);
    for (w, h) in [(0, 100), (100, 0), (0, 0)] {
        let req = ImageRequest {
            width: Twiplet(w),
            height: Twiplet(h),
            ..request()
        };
        let err = host
            .create_image(TableResolver::default(), "", "", &req)
            .unwrap_err();
        assert_eq!(err, ReturnCode::InvalidValue);
    }
}

#[test]
fn unsupported_configuration_is_not_implemented() {
    let err = host(Mode::Unsupported)
        .create_image(TableResolver::default(), "", "", &request())
        .unwrap_err();
    assert_eq!(err, ReturnCode::NotImplemented);
}

#[test]
fn render_error_fails() {
    let err = host(Mode::FailRender)
        .create_image(TableResolver::default(), "", "", &request())
        .unwrap_err();
    assert_eq!(err, ReturnCode::Failed);
}

#[test]
fn panics_are_caught() {
    for mode in [Mode::PanicRender, Mode::PanicBuilder] {
        let err = host(mode)
            .create_image(TableResolver::default(), "", "", &request())
            .unwrap_err();
        assert_eq!(err, ReturnCode::Failed);
    }
}

#[test]
fn info_logging_does_not_change_result() {
    let mut options = Options::default();
    options.log.level = LogLevel::Info;
    let host = Host::new(MockClient::new(Mode::Echo), options);
    assert!(host.options().log_info());
    let image = host
        .create_image(TableResolver::default(), "config=Line", "", &request())
        .unwrap();
    assert_eq!(image.data, b"Line");
}

#[test]
fn return_code_names() {
    assert_eq!(ReturnCode::Ok.to_string(), "OK");
    assert_eq!(
        ReturnCode::FailedToCreateJavaVM.to_string(),
        "FailedToCreateJavaVM"
    );
    assert_eq!(ReturnCode::FailedToCreateJavaVM.code(), 10);
    assert_eq!(describe_return_code(5), "InvalidValue");
    assert_eq!(describe_return_code(999), "Unknown (999)");
}

#[test]
fn image_format_names() {
    assert_eq!(ImageFormat::Bmp.to_string(), "BMP");
    assert_eq!(ImageFormat::Svg.to_string(), "SVG");
    assert_eq!(ImageFormat::try_from(1), Ok(ImageFormat::Png));
    assert_eq!(describe_image_format(999), "Unknown (999)");
}

#[test]
fn color_space_names() {
    assert_eq!(ColorSpace::Named.to_string(), "Named");
    assert_eq!(ColorSpace::Cmyk.to_string(), "CMYK");
    assert_eq!(ColorSpace::try_from(-1), Err(-1));
    assert_eq!(describe_color_space(999), "Unknown (999)");
}

#[test]
fn codes_round_trip_through_integers() {
    for rc in ReturnCode::ALL {
        assert_eq!(ReturnCode::try_from(rc.code()), Ok(*rc));
    }
    for cs in ColorSpace::ALL {
        assert_eq!(ColorSpace::try_from(cs.code()), Ok(*cs));
    }
}
