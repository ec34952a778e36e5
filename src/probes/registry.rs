// font-locate/src/probes/registry.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A probe that lists the fonts registered with Windows.
//!
//! Windows keeps one value per installed font under
//! `HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts`, mapping a display
//! name such as `Arial Bold (TrueType)` to a file name such as `arialbd.ttf`.

use log::debug;
#[cfg(not(target_family = "windows"))]
use log::warn;
use std::path::{Path, PathBuf};

use crate::error::ProbeError;
use crate::probe::Probe;
use crate::record::{self, FontRecord};
use crate::style::Style;

#[cfg(target_family = "windows")]
use std::ffi::OsString;
#[cfg(target_family = "windows")]
use std::os::windows::ffi::OsStringExt;
#[cfg(target_family = "windows")]
use std::ptr;
#[cfg(target_family = "windows")]
use winapi::shared::minwindef::{BYTE, DWORD, HKEY, MAX_PATH, UINT};
#[cfg(target_family = "windows")]
use winapi::shared::winerror::{ERROR_NO_MORE_ITEMS, ERROR_SUCCESS};
#[cfg(target_family = "windows")]
use winapi::um::sysinfoapi;
#[cfg(target_family = "windows")]
use winapi::um::winnt::{KEY_READ, REG_EXPAND_SZ, REG_SZ};
#[cfg(target_family = "windows")]
use winapi::um::winreg::{RegCloseKey, RegEnumValueW, RegOpenKeyExW, HKEY_LOCAL_MACHINE};

/// The registry key, relative to `HKEY_LOCAL_MACHINE`, that lists the installed fonts.
pub const FONTS_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts";

const DISPLAY_NAME_SUFFIXES: [&str; 2] = ["(TrueType)", "(All Res)"];
const STYLE_WORDS: [&str; 3] = ["Bold", "Italic", "Oblique"];

// Value names are at most 16383 characters long.
#[cfg(target_family = "windows")]
const MAX_VALUE_NAME: usize = 16384;
#[cfg(target_family = "windows")]
const MAX_VALUE_DATA: usize = 32768;

/// A probe that lists the fonts registered with Windows.
///
/// A missing registry key yields an empty list. Elsewhere than Windows there is no registry, so
/// the list is always empty.
#[derive(Clone, Debug, Default)]
pub struct WindowsRegistryProbe;

impl WindowsRegistryProbe {
    #[inline]
    pub fn new() -> WindowsRegistryProbe {
        WindowsRegistryProbe
    }

    /// Reads the font registrations and converts each to a record.
    pub fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        let font_directory = system_font_directory();
        let mut records = vec![];
        for (display_name, file_name) in read_font_registrations() {
            match record_from_registration(&display_name, &file_name, &font_directory) {
                Some(record) => records.push(record),
                None => debug!("skipping font registration {:?} = {:?}", display_name, file_name),
            }
        }
        Ok(records)
    }
}

impl Probe for WindowsRegistryProbe {
    #[inline]
    fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        self.enumerate()
    }
}

/// Converts one `display name → file name` registration into a record.
///
/// File names without a directory component are resolved against `font_directory`.
pub(crate) fn record_from_registration(display_name: &str,
                                       file_name: &str,
                                       font_directory: &Path)
                                       -> Option<FontRecord> {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return None
    }

    let mut name = display_name.trim();
    for suffix in &DISPLAY_NAME_SUFFIXES {
        if name.ends_with(suffix) {
            name = name[..(name.len() - suffix.len())].trim_end();
        }
    }

    let styles = Style::from_name_fragments(name, " ");

    // Only the ends are trimmed: "Arial Bold Narrow" keeps both inner spaces ("arial  narrow").
    let mut family = name.to_owned();
    for word in &STYLE_WORDS {
        family = family.replace(word, "");
    }

    let file_path = if file_name.contains('\\') || file_name.contains('/') {
        PathBuf::from(file_name)
    } else {
        font_directory.join(file_name)
    };
    let file_format = record::file_format_of(Path::new(file_name));

    FontRecord::new(&family, name, styles, &file_format, file_path)
}

#[cfg(target_family = "windows")]
fn system_font_directory() -> PathBuf {
    unsafe {
        let mut buffer = vec![0; MAX_PATH];
        let len = sysinfoapi::GetWindowsDirectoryW(buffer.as_mut_ptr(), buffer.len() as UINT);
        buffer.truncate(len as usize);

        let mut path = if len == 0 {
            PathBuf::from(r"C:\Windows")
        } else {
            PathBuf::from(OsString::from_wide(&buffer))
        };
        path.push("Fonts");
        path
    }
}

#[cfg(not(target_family = "windows"))]
fn system_font_directory() -> PathBuf {
    PathBuf::from(r"C:\Windows\Fonts")
}

#[cfg(not(target_family = "windows"))]
fn read_font_registrations() -> Vec<(String, String)> {
    warn!("no registry on this platform; no fonts registered under {}", FONTS_KEY);
    vec![]
}

#[cfg(target_family = "windows")]
fn read_font_registrations() -> Vec<(String, String)> {
    let key = match RegistryKey::open_local_machine(FONTS_KEY) {
        Some(key) => key,
        None => {
            log::warn!("registry key HKEY_LOCAL_MACHINE\\{} is missing", FONTS_KEY);
            return vec![]
        }
    };

    let mut registrations = vec![];
    let mut value_name = vec![0u16; MAX_VALUE_NAME];
    let mut value_data = vec![0 as BYTE; MAX_VALUE_DATA];
    let mut index: DWORD = 0;
    loop {
        let mut value_name_len = value_name.len() as DWORD;
        let mut value_data_len = value_data.len() as DWORD;
        let mut value_type: DWORD = 0;
        let status = unsafe {
            RegEnumValueW(key.hkey,
                          index,
                          value_name.as_mut_ptr(),
                          &mut value_name_len,
                          ptr::null_mut(),
                          &mut value_type,
                          value_data.as_mut_ptr(),
                          &mut value_data_len)
        };
        index += 1;

        if status == ERROR_NO_MORE_ITEMS as i32 {
            break
        }
        if status != ERROR_SUCCESS as i32 || (value_type != REG_SZ && value_type != REG_EXPAND_SZ) {
            debug!("skipping registry value #{} (status {}, type {})", index - 1, status, value_type);
            continue
        }

        let name = String::from_utf16_lossy(&value_name[..(value_name_len as usize)]);
        let data = wide_bytes_to_string(&value_data[..(value_data_len as usize)]);
        registrations.push((name, data));
    }
    registrations
}

// Registry string data is UTF-16LE, usually (but not always) NUL-terminated.
#[cfg(target_family = "windows")]
fn wide_bytes_to_string(bytes: &[u8]) -> String {
    let wide: Vec<u16> = bytes.chunks_exact(2)
                              .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                              .take_while(|&unit| unit != 0)
                              .collect();
    String::from_utf16_lossy(&wide)
}

#[cfg(target_family = "windows")]
struct RegistryKey {
    hkey: HKEY,
}

#[cfg(target_family = "windows")]
impl RegistryKey {
    fn open_local_machine(subkey: &str) -> Option<RegistryKey> {
        let subkey: Vec<u16> = subkey.encode_utf16().chain(Some(0)).collect();
        let mut hkey: HKEY = ptr::null_mut();
        let status = unsafe {
            RegOpenKeyExW(HKEY_LOCAL_MACHINE, subkey.as_ptr(), 0, KEY_READ, &mut hkey)
        };
        if status == ERROR_SUCCESS as i32 {
            Some(RegistryKey { hkey })
        } else {
            None
        }
    }
}

#[cfg(target_family = "windows")]
impl Drop for RegistryKey {
    #[inline]
    fn drop(&mut self) {
        unsafe {
            RegCloseKey(self.hkey);
        }
    }
}
