//! The raster drawing surface and its pixel snapshots.

use thiserror::Error;

/// Errors raised while creating a drawing surface.
///
/// Runtime drawing operations never surface errors; once a [`Surface`] exists,
/// failed Cairo calls degrade to no-ops.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Requested dimensions were zero or negative.
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    /// Cairo refused to allocate the backing pixel buffer.
    #[error("failed to allocate {width}x{height} image surface")]
    Allocate {
        width: i32,
        height: i32,
        #[source]
        source: cairo::Error,
    },
}

/// An immutable full-surface pixel buffer captured at one instant.
///
/// Snapshots are independent copies (no diffing) and are only ever produced
/// and consumed by the surface they were captured from. Equality is
/// byte-for-byte over the pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    data: Vec<u8>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// A 2D raster canvas of fixed width/height.
///
/// Wraps a Cairo ARGB32 image surface. The dimensions are set once at
/// construction (from the window size) and never change; the pixel buffer is
/// freed when the surface is dropped.
///
/// Pixels are premultiplied ARGB in native byte order, matching what Cairo
/// writes. A freshly created surface is fully transparent.
pub struct Surface {
    image: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Surface {
    /// Allocates a transparent surface of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).map_err(
            |source| SurfaceError::Allocate {
                width,
                height,
                source,
            },
        )?;

        Ok(Self {
            image,
            width,
            height,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Runs a drawing closure against a fresh Cairo context for this surface.
    ///
    /// Context creation failures are logged and swallowed; every drawing
    /// operation is a silent no-op when the context is unavailable.
    pub fn with_context<F: FnOnce(&cairo::Context)>(&mut self, f: F) {
        match cairo::Context::new(&self.image) {
            Ok(ctx) => f(&ctx),
            Err(err) => log::warn!("Skipping draw operation, no cairo context: {err}"),
        }
    }

    /// Captures the current pixel contents as an independent [`Snapshot`].
    ///
    /// Returns `None` if the pixel buffer cannot be borrowed (the surface is
    /// then left untouched).
    pub fn snapshot(&mut self) -> Option<Snapshot> {
        self.image.flush();
        match self.image.data() {
            Ok(data) => Some(Snapshot {
                data: data.to_vec(),
            }),
            Err(err) => {
                log::warn!("Skipping snapshot, surface data unavailable: {err}");
                None
            }
        }
    }

    /// Overwrites the surface pixels with a previously captured snapshot.
    ///
    /// Silent no-op when the snapshot does not belong to a surface of this
    /// size or the pixel buffer cannot be borrowed.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.image.flush();
        match self.image.data() {
            Ok(mut data) => {
                if data.len() == snapshot.data.len() {
                    data.copy_from_slice(&snapshot.data);
                } else {
                    log::warn!(
                        "Skipping restore, snapshot size {} does not match surface size {}",
                        snapshot.data.len(),
                        data.len()
                    );
                }
            }
            Err(err) => log::warn!("Skipping restore, surface data unavailable: {err}"),
        }
        self.image.mark_dirty();
    }

    /// Clears every pixel back to fully transparent.
    pub fn clear(&mut self) {
        self.with_context(|ctx| {
            ctx.set_operator(cairo::Operator::Clear);
            let _ = ctx.paint();
        });
    }

    /// Reads one pixel as premultiplied `0xAARRGGBB`.
    ///
    /// Returns `None` for out-of-bounds coordinates or when the pixel buffer
    /// cannot be borrowed.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }

        self.image.flush();
        let stride = self.image.stride() as usize;
        let data = self.image.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        Some(u32::from_ne_bytes(bytes))
    }

    /// Returns true when every pixel is fully transparent.
    pub fn is_blank(&mut self) -> bool {
        self.image.flush();
        match self.image.data() {
            Ok(data) => data.iter().all(|byte| *byte == 0),
            Err(_) => false,
        }
    }

    /// Row stride of the backing buffer in bytes.
    pub(crate) fn stride(&self) -> i32 {
        self.image.stride()
    }

    /// Copies out the raw premultiplied ARGB pixel buffer.
    pub(crate) fn copy_data(&mut self) -> Option<Vec<u8>> {
        self.image.flush();
        self.image.data().ok().map(|data| data.to_vec())
    }
}
