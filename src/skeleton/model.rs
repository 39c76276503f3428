use crate::foundation::core::Vec3;
use crate::foundation::error::{SwingcapError, SwingcapResult};

/// A named node in the skeletal hierarchy with a fixed parent-relative offset.
///
/// Joints are static configuration: the whole table is built once by
/// [`Skeleton::standard`] and never mutated afterwards, so a single skeleton
/// value can be shared read-only across every frame and conversion.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Joint {
    /// Unique joint name (matches the names the viewer expects).
    pub name: &'static str,
    /// Index of the parent joint; `None` only for the root.
    pub parent: Option<usize>,
    /// Offset from the parent's origin, in centimeters.
    pub offset: Vec3,
}

/// The fixed 22-joint anatomical skeleton shared by all frames.
///
/// Joint order is authoritative: the motion assembler maps skeleton index
/// `i` onto source joint blocks, and both serializers traverse joints in
/// this order. The parent pointers form a single-rooted tree; the per-joint
/// child lists are derived for traversal and are not authoritative.
#[derive(Clone, Debug)]
pub struct Skeleton {
    joints: Vec<Joint>,
    children: Vec<Vec<usize>>,
}

/// `(name, parent_index, offset_cm)` rows for the standard swing skeleton.
///
/// Names, hierarchy and centimeter offsets follow the capture vendor's
/// viewer conventions. Parents always precede children in this table.
const STANDARD_JOINTS: [(&str, Option<usize>, [f64; 3]); 22] = [
    ("Hips", None, [0.0, 0.0, 0.0]),
    ("Spine", Some(0), [0.0, 12.0, 0.0]),
    ("Spine1", Some(1), [0.0, 15.0, 0.0]),
    ("Spine2", Some(2), [0.0, 15.0, 0.0]),
    ("Neck", Some(3), [0.0, 12.0, 0.0]),
    ("Head", Some(4), [0.0, 8.0, 0.0]),
    ("LeftShoulder", Some(3), [-8.0, 5.0, 0.0]),
    ("LeftArm", Some(6), [-18.0, 0.0, 0.0]),
    ("LeftForeArm", Some(7), [-25.0, 0.0, 0.0]),
    ("LeftHand", Some(8), [-18.0, 0.0, 0.0]),
    ("RightShoulder", Some(3), [8.0, 5.0, 0.0]),
    ("RightArm", Some(10), [18.0, 0.0, 0.0]),
    ("RightForeArm", Some(11), [25.0, 0.0, 0.0]),
    ("RightHand", Some(12), [18.0, 0.0, 0.0]),
    ("LeftUpLeg", Some(0), [-5.0, 0.0, 0.0]),
    ("LeftLeg", Some(14), [0.0, -40.0, 0.0]),
    ("LeftFoot", Some(15), [0.0, -40.0, 0.0]),
    ("LeftToeBase", Some(16), [0.0, 0.0, 15.0]),
    ("RightUpLeg", Some(0), [5.0, 0.0, 0.0]),
    ("RightLeg", Some(18), [0.0, -40.0, 0.0]),
    ("RightFoot", Some(19), [0.0, -40.0, 0.0]),
    ("RightToeBase", Some(20), [0.0, 0.0, 15.0]),
];

impl Skeleton {
    /// Build the standard swing-capture skeleton.
    pub fn standard() -> Self {
        let joints = STANDARD_JOINTS
            .iter()
            .map(|&(name, parent, [x, y, z])| Joint {
                name,
                parent,
                offset: Vec3::new(x, y, z),
            })
            .collect();
        let mut skeleton = Self {
            joints,
            children: Vec::new(),
        };
        skeleton.children = skeleton.derive_children();
        debug_assert!(skeleton.validate().is_ok());
        skeleton
    }

    fn derive_children(&self) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::new(); self.joints.len()];
        for (index, joint) in self.joints.iter().enumerate() {
            if let Some(parent) = joint.parent {
                children[parent].push(index);
            }
        }
        children
    }

    /// Number of joints in the skeleton.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// True when the skeleton has no joints (never the case for
    /// [`Skeleton::standard`]).
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// All joints in table order.
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// Joint at `index` in the table.
    pub fn joint(&self, index: usize) -> &Joint {
        &self.joints[index]
    }

    /// Index of the single root joint.
    pub fn root(&self) -> usize {
        0
    }

    /// Derived child indices of `index`, in joint-table order.
    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    /// A leaf carries no child joints and gets an end-site block in BVH.
    pub fn is_leaf(&self, index: usize) -> bool {
        self.children[index].is_empty()
    }

    /// Joint names in table order.
    pub fn joint_names(&self) -> Vec<&'static str> {
        self.joints.iter().map(|j| j.name).collect()
    }

    /// `(parent, child)` name pairs derived from the parent relation.
    pub fn bone_connections(&self) -> Vec<(&'static str, &'static str)> {
        self.joints
            .iter()
            .filter_map(|joint| {
                joint
                    .parent
                    .map(|parent| (self.joints[parent].name, joint.name))
            })
            .collect()
    }

    /// Check the single-rooted-tree invariant.
    ///
    /// Exactly one joint has no parent, every parent index refers to an
    /// earlier joint (which rules out cycles), and a traversal from the root
    /// reaches every joint exactly once.
    pub fn validate(&self) -> SwingcapResult<()> {
        let roots = self.joints.iter().filter(|j| j.parent.is_none()).count();
        if roots != 1 {
            return Err(SwingcapError::parse(format!(
                "skeleton must have exactly one root, found {roots}"
            )));
        }
        for (index, joint) in self.joints.iter().enumerate() {
            if let Some(parent) = joint.parent {
                if parent >= index {
                    return Err(SwingcapError::parse(format!(
                        "joint '{}' must appear after its parent",
                        joint.name
                    )));
                }
            }
        }

        let mut visited = vec![false; self.joints.len()];
        let mut stack = vec![self.root()];
        while let Some(index) = stack.pop() {
            if visited[index] {
                return Err(SwingcapError::parse(format!(
                    "joint '{}' visited twice during traversal",
                    self.joints[index].name
                )));
            }
            visited[index] = true;
            stack.extend_from_slice(self.children(index));
        }
        if let Some(unreached) = visited.iter().position(|&v| !v) {
            return Err(SwingcapError::parse(format!(
                "joint '{}' unreachable from root",
                self.joints[unreached].name
            )));
        }
        Ok(())
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/skeleton/model.rs"]
mod tests;
