// Copyright (c) wirecast.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::Type;

pub(crate) fn value_range<'a>(value: Type) -> &'a str {
    match value {
        Type::Bool => unreachable!(),
        Type::Int8 => "-128 to 127",
        Type::Int16 => "-32_768 to 32_767",
        Type::Int32 => "-2_147_483_648 to 2_147_483_647",
        Type::Uint8 => "0 to 255",
        Type::Uint16 => "0 to 65_535",
        Type::Uint32 => "0 to 4_294_967_295",
        Type::Float32 => "-3.4e38 to +3.4e38",
        Type::Float64 => "-1.8e308 to +1.8e308",
        Type::Utf8 => unreachable!(),
        Type::Array => unreachable!(),
    }
}
