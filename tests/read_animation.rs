//! Integration tests decoding synthetic SCA buffers.

use supcom_io::prelude::*;
use supcom_io::sca::{FRAME_HEADER_SIZE, HEADER_SIZE, POSE_ENTRY_SIZE, SCA_VERSION};

/// One pose entry per bone link: position x,y,z then quaternion w,x,y,z.
type WireTransform = [f32; 7];

const REST: WireTransform = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];

struct TestClip {
    duration: f32,
    /// (name, parent index) per bone link.
    links: Vec<(&'static str, i32)>,
    initial_pose: Vec<WireTransform>,
    /// (time, flags, pose) per frame.
    frames: Vec<(f32, u32, Vec<WireTransform>)>,
    /// Overrides the computed frame size when set.
    frame_size: Option<u32>,
    version: u32,
}

impl TestClip {
    fn new(links: Vec<(&'static str, i32)>) -> Self {
        let rest: Vec<WireTransform> = links.iter().map(|_| REST).collect();
        Self {
            duration: 1.0,
            links,
            initial_pose: rest,
            frames: Vec::new(),
            frame_size: None,
            version: SCA_VERSION,
        }
    }

    fn frame(mut self, time: f32, flags: u32, pose: Vec<WireTransform>) -> Self {
        self.frames.push((time, flags, pose));
        self
    }

    fn build(&self) -> Vec<u8> {
        let names_len: u32 = self.links.iter().map(|(n, _)| n.len() as u32 + 1).sum();
        let bone_names_offset = HEADER_SIZE as u32;
        let bone_links_offset = bone_names_offset + names_len;
        let anim_offset = bone_links_offset + self.links.len() as u32 * 4;
        let frame_size = self.frame_size.unwrap_or(
            (FRAME_HEADER_SIZE + self.links.len() * POSE_ENTRY_SIZE) as u32,
        );

        let mut buf = Vec::new();
        buf.extend_from_slice(b"ANIM");
        buf.extend_from_slice(&self.version.to_le_bytes());
        buf.extend_from_slice(&(self.frames.len() as u32).to_le_bytes());
        buf.extend_from_slice(&self.duration.to_le_bytes());
        buf.extend_from_slice(&(self.links.len() as u32).to_le_bytes());
        buf.extend_from_slice(&bone_names_offset.to_le_bytes());
        buf.extend_from_slice(&bone_links_offset.to_le_bytes());
        buf.extend_from_slice(&anim_offset.to_le_bytes());
        buf.extend_from_slice(&frame_size.to_le_bytes());

        for (name, _) in &self.links {
            buf.extend_from_slice(name.as_bytes());
            buf.push(0);
        }
        for (_, parent) in &self.links {
            buf.extend_from_slice(&parent.to_le_bytes());
        }
        for entry in &self.initial_pose {
            for v in entry {
                buf.extend_from_slice(&v.to_le_bytes());
            }
        }
        for (time, flags, pose) in &self.frames {
            buf.extend_from_slice(&time.to_le_bytes());
            buf.extend_from_slice(&flags.to_le_bytes());
            for entry in pose {
                for v in entry {
                    buf.extend_from_slice(&v.to_le_bytes());
                }
            }
        }
        buf
    }
}

fn walk_clip() -> TestClip {
    let moved: Vec<WireTransform> = vec![
        [0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        [2.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    ];
    TestClip::new(vec![("pelvis", -1), ("leg", 0)])
        .frame(0.0, 0, vec![REST, REST])
        .frame(0.1, 4, moved)
}

#[test]
fn test_decode_clip() {
    let clip = Animation::from_bytes(walk_clip().build()).unwrap();

    assert_eq!(clip.duration, 1.0);
    assert_eq!(clip.bone_links.len(), 2);
    assert_eq!(clip.bone_links[0].name, "pelvis");
    assert_eq!(clip.bone_links[1].name, "leg");
    assert_eq!(clip.bone_links[0].parent, None);
    assert_eq!(clip.link_parent(&clip.bone_links[1]).unwrap().name, "pelvis");

    assert_eq!(clip.initial_pose.len(), 2);
    assert_eq!(
        clip.initial_pose.transform(0).unwrap().rotation,
        supcom_io::util::Quat::IDENTITY
    );
    assert!(clip.initial_pose.transform(2).is_none());

    assert_eq!(clip.frames.len(), 2);
    assert_eq!(clip.frames[0].time, 0.0);
    assert_eq!(clip.frames[1].time, 0.1);
    assert_eq!(clip.frames[0].flags, 0);
    assert_eq!(clip.frames[1].flags, 4);

    let moved = clip.frames[1].pose.transform(1).unwrap();
    assert_eq!(moved.position, supcom_io::util::Vec3::new(2.0, 0.0, 0.0));
    // Disk order w,x,y,z: (0, 0, 1, 0) is a y-axis quaternion.
    assert_eq!(moved.rotation, supcom_io::util::Quat::from_xyzw(0.0, 1.0, 0.0, 0.0));
}

#[test]
fn test_frame_size_mismatch() {
    let mut clip = walk_clip();
    clip.frame_size = Some(60); // computed is 8 + 2 * 28 = 64
    let err = Animation::from_bytes(clip.build()).unwrap_err();
    assert!(matches!(err, Error::TruncatedInput(_)));
}

#[test]
fn test_bad_magic() {
    let mut buf = walk_clip().build();
    buf[0..4].copy_from_slice(b"MODL");
    let err = Animation::from_bytes(buf).unwrap_err();
    assert!(matches!(err, Error::BadMagic { expected: "ANIM", .. }));
}

#[test]
fn test_unsupported_version() {
    let mut clip = walk_clip();
    clip.version = 3;
    let err = Animation::from_bytes(clip.build()).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedVersion {
            found: 3,
            supported: 5
        }
    ));
}

#[test]
fn test_link_parent_out_of_range() {
    let clip = TestClip::new(vec![("pelvis", -1), ("leg", 7)]);
    let err = Animation::from_bytes(clip.build()).unwrap_err();
    assert!(matches!(err, Error::InvalidBoneLink(_)));
}

#[test]
fn test_link_cycle() {
    let clip = TestClip::new(vec![("a", 1), ("b", 0)]);
    let err = Animation::from_bytes(clip.build()).unwrap_err();
    assert!(matches!(err, Error::InvalidBoneLink(_)));
}

#[test]
fn test_truncated_frames() {
    let mut buf = walk_clip().build();
    // Claim a third frame without providing its bytes.
    buf[8..12].copy_from_slice(&3u32.to_le_bytes());
    let err = Animation::from_bytes(buf).unwrap_err();
    assert!(matches!(err, Error::TruncatedInput(_)));
}

#[test]
fn test_absurd_bone_count() {
    let mut buf = walk_clip().build();
    // A link count this large would size multi-gigabyte tables; it must
    // fail the range check, not the allocation.
    buf[16..20].copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
    let err = Animation::from_bytes(buf).unwrap_err();
    assert!(matches!(err, Error::TruncatedInput(_)));
}

#[test]
fn test_absurd_frame_count() {
    let mut buf = walk_clip().build();
    buf[8..12].copy_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
    let err = Animation::from_bytes(buf).unwrap_err();
    assert!(matches!(err, Error::TruncatedInput(_)));
}

#[test]
fn test_empty_clip() {
    // No frames at all is legal; the initial pose still decodes.
    let clip = Animation::from_bytes(TestClip::new(vec![("pelvis", -1)]).build()).unwrap();
    assert!(clip.frames.is_empty());
    assert_eq!(clip.initial_pose.len(), 1);
}

#[test]
fn test_open_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walk.sca");
    std::fs::write(&path, walk_clip().build()).unwrap();

    let clip = Animation::open(&path).unwrap();
    assert_eq!(clip.frames.len(), 2);
}

#[test]
fn test_open_missing_path() {
    let err = Animation::open("/no/such/clip.sca").unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(_)));
}
