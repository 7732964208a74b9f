//! Numeric codes shared with the host. The values are part of its API.

use std::fmt;

macro_rules! host_code {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident = $code:literal => $label:literal),+ $(,)? }
        describe = $describe:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $($variant = $code),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn code(self) -> i32 {
                self as i32
            }

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl TryFrom<i32> for $name {
            /// The unrecognised code.
            type Error = i32;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    other => Err(other),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        /// Name of a raw code, or `Unknown (n)`.
        #[must_use]
        pub fn $describe(code: i32) -> String {
            $name::try_from(code).map_or_else(|n| format!("Unknown ({n})"), |v| v.name().to_string())
        }
    };
}

host_code! {
    /// Result of a host entry point.
    pub enum ReturnCode {
        Ok = 0 => "OK",
        Failed = 1 => "Failed",
        NotImplemented = 2 => "NotImplemented",
        InvalidFilePath = 3 => "InvalidFilePath",
        MissingProperty = 4 => "MissingProperty",
        InvalidValue = 5 => "InvalidValue",
        UnresolvedFont = 6 => "UnresolvedFont",
        InvalidDataString = 7 => "InvalidDataString",
        EmptyDataString = 8 => "EmptyDataString",
        JavaException = 9 => "JavaException",
        FailedToCreateJavaVM = 10 => "FailedToCreateJavaVM",
    }
    describe = describe_return_code;
}

host_code! {
    /// Encoding of the rendered image.
    pub enum ImageFormat {
        Bmp = 0 => "BMP",
        Png = 1 => "PNG",
        Jpg = 2 => "JPG",
        Svg = 3 => "SVG",
    }
    describe = describe_image_format;
}

host_code! {
    /// Colour space of the rendered image.
    pub enum ColorSpace {
        Named = 0 => "Named",
        Rgb = 1 => "RGB",
        Cmyk = 2 => "CMYK",
    }
    describe = describe_color_space;
}
