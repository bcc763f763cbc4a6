//! Identity groups: append-only Poseidon Merkle trees over identity commitments.
//!
//! The construction mirrors the incremental binary tree used by the Semaphore
//! toolchain (`PoseidonT3`, zero leaf `0`, left/right chosen by index parity), so
//! a root computed here is the root a voter's proof is generated against.
//!
//! On-chain hashing goes through the `sol_poseidon` syscall; the off-chain
//! snapshot hashes with `light-poseidon` directly.

use anchor_lang::prelude::*;
use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use light_poseidon::{Poseidon, PoseidonBytesHasher};
use solana_poseidon::{hashv, Endianness, Parameters};

use crate::{
    constants::{EMPTY_SUBTREE_ROOTS, MAX_TREE_DEPTH},
    error::PollError,
};

/// On-chain state of one poll's identity group.
///
/// Only the left node of every level's last subtree is kept; the right side of a
/// partially filled level is always the empty subtree root for that level.
#[zero_copy]
pub struct IdentityGroup {
    /// Index the next commitment will be written to
    pub next_leaf_index: u64,

    /// Tree depth, capacity is `2^depth`
    pub depth: u8,

    pub _padding: [u8; 7],

    /// Current root over all admitted commitments
    pub root: [u8; 32],

    /// Last left node written at each level
    pub filled_subtrees: [[u8; 32]; MAX_TREE_DEPTH],
}

impl IdentityGroup {
    /// Initializes an empty group of `depth` levels.
    pub fn create(&mut self, depth: u8) -> Result<()> {
        require!(
            depth > 0 && depth as usize <= MAX_TREE_DEPTH,
            PollError::InvalidDepth
        );

        let depth_levels = depth as usize;
        self.filled_subtrees[..depth_levels].copy_from_slice(&EMPTY_SUBTREE_ROOTS[..depth_levels]);
        self.depth = depth;
        self.next_leaf_index = 0;
        self.root = EMPTY_SUBTREE_ROOTS[depth_levels];

        Ok(())
    }

    pub fn capacity(&self) -> u64 {
        1u64 << self.depth
    }

    pub fn is_full(&self) -> bool {
        self.next_leaf_index >= self.capacity()
    }

    /// Appends `commitment` at the next free leaf and returns the new root.
    pub fn add_member(&mut self, commitment: [u8; 32]) -> Result<[u8; 32]> {
        require!(self.depth > 0, PollError::InvalidDepth);
        require!(!self.is_full(), PollError::TreeFull);
        require!(
            is_scalar_field_element(&commitment),
            PollError::InvalidCommitment
        );

        let mut index = self.next_leaf_index;
        let mut node = commitment;

        for level in 0..self.depth as usize {
            node = if index & 1 == 0 {
                self.filled_subtrees[level] = node;
                hash_pair(&node, &EMPTY_SUBTREE_ROOTS[level])?
            } else {
                hash_pair(&self.filled_subtrees[level], &node)?
            };
            index >>= 1;
        }

        self.root = node;
        self.next_leaf_index = self
            .next_leaf_index
            .checked_add(1)
            .ok_or(PollError::ArithmeticOverflow)?;

        Ok(node)
    }
}

/// Off-chain view of a group, stored as an arena of node rows indexed by
/// `(level, index)`.
///
/// Relays and voters rebuild this from the ordered `MemberAdded` events to obtain
/// the Merkle path fed to the prover. Rows only hold populated nodes; anything past
/// the end of a row is that level's empty subtree root.
#[derive(Clone, Debug)]
pub struct MembershipSnapshot {
    nodes: Vec<Vec<[u8; 32]>>,
}

/// Sibling path of one leaf, ordered from the leaf level upwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerklePath {
    pub leaf: [u8; 32],
    pub siblings: Vec<[u8; 32]>,
    /// 0 when the path node is a left child, 1 when it is a right child
    pub path_indices: Vec<u8>,
}

impl MembershipSnapshot {
    pub fn build(depth: u8, leaves: &[[u8; 32]]) -> Result<Self> {
        require!(
            depth > 0 && depth as usize <= MAX_TREE_DEPTH,
            PollError::InvalidDepth
        );
        require!(
            (leaves.len() as u64) <= 1u64 << depth,
            PollError::TreeFull
        );
        require!(
            leaves.iter().all(is_scalar_field_element),
            PollError::InvalidCommitment
        );

        let mut hasher = poseidon()?;

        let mut nodes = Vec::with_capacity(depth as usize + 1);
        nodes.push(leaves.to_vec());
        for level in 0..depth as usize {
            let row = nodes[level]
                .chunks(2)
                .map(|pair| {
                    let right = pair.get(1).unwrap_or(&EMPTY_SUBTREE_ROOTS[level]);
                    hash_with(&mut hasher, &pair[0], right)
                })
                .collect::<Result<Vec<_>>>()?;
            nodes.push(row);
        }

        Ok(Self { nodes })
    }

    pub fn depth(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.nodes[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[0].is_empty()
    }

    pub fn root(&self) -> [u8; 32] {
        let depth = self.depth();
        self.node(depth, 0)
    }

    fn node(&self, level: usize, index: usize) -> [u8; 32] {
        self.nodes[level]
            .get(index)
            .copied()
            .unwrap_or(EMPTY_SUBTREE_ROOTS[level])
    }

    pub fn merkle_path(&self, leaf_index: usize) -> Option<MerklePath> {
        let leaf = *self.nodes[0].get(leaf_index)?;

        let mut siblings = Vec::with_capacity(self.depth());
        let mut path_indices = Vec::with_capacity(self.depth());
        let mut index = leaf_index;
        for level in 0..self.depth() {
            siblings.push(self.node(level, index ^ 1));
            path_indices.push((index & 1) as u8);
            index >>= 1;
        }

        Some(MerklePath {
            leaf,
            siblings,
            path_indices,
        })
    }
}

impl MerklePath {
    /// Folds the path back up to a root.
    pub fn compute_root(&self) -> Result<[u8; 32]> {
        let mut hasher = poseidon()?;
        let mut node = self.leaf;
        for (sibling, side) in self.siblings.iter().zip(&self.path_indices) {
            node = if *side == 0 {
                hash_with(&mut hasher, &node, sibling)?
            } else {
                hash_with(&mut hasher, sibling, &node)?
            };
        }
        Ok(node)
    }
}

/// Poseidon over two BN254 scalars, circom parameters (`PoseidonT3`).
pub fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> Result<[u8; 32]> {
    hashv(
        Parameters::Bn254X5,
        Endianness::BigEndian,
        &[left.as_slice(), right.as_slice()],
    )
        .map(|hash| hash.to_bytes())
        .map_err(|_| error!(PollError::PoseidonHashFailed))
}

/// True when `value`, read big-endian, is below the BN254 scalar field modulus.
pub fn is_scalar_field_element(value: &[u8; 32]) -> bool {
    value.as_slice() < Fr::MODULUS.to_bytes_be().as_slice()
}

fn poseidon() -> Result<Poseidon<Fr>> {
    Poseidon::<Fr>::new_circom(2).map_err(|_| error!(PollError::PoseidonHashFailed))
}

fn hash_with(hasher: &mut Poseidon<Fr>, left: &[u8; 32], right: &[u8; 32]) -> Result<[u8; 32]> {
    hasher
        .hash_bytes_be(&[left.as_slice(), right.as_slice()])
        .map_err(|_| error!(PollError::PoseidonHashFailed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::ZERO_VALUE,
        test_utils::{assert_poll_error, field},
    };
    use bytemuck::Zeroable;
    use proptest::prelude::*;

    fn from_hex(s: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&hex::decode(s).unwrap());
        out
    }

    fn empty_group(depth: u8) -> IdentityGroup {
        let mut group = IdentityGroup::zeroed();
        group.create(depth).unwrap();
        group
    }

    #[test]
    fn poseidon_matches_circom_vectors() {
        let expected = from_hex("115cc0f5e7d690413df64c6b9662e9cf2a3617f2743245519e19607a4417189a");
        assert_eq!(hash_pair(&field(1), &field(2)).unwrap(), expected);

        let mut hasher = poseidon().unwrap();
        assert_eq!(hash_with(&mut hasher, &field(1), &field(2)).unwrap(), expected);
    }

    #[test]
    fn zero_hashes_match_toolchain() {
        assert_eq!(EMPTY_SUBTREE_ROOTS[0], ZERO_VALUE);
        assert_eq!(
            EMPTY_SUBTREE_ROOTS[1],
            from_hex("2098f5fb9e239eab3ceac3f27b81e481dc3124d55ffed523a839ee8446b64864")
        );
        assert_eq!(
            EMPTY_SUBTREE_ROOTS[2],
            from_hex("1069673dcdb12263df301a6ff584a7ec261a44cb9dc68df067a4774460b1f1e1")
        );
        for level in 0..MAX_TREE_DEPTH {
            let below = EMPTY_SUBTREE_ROOTS[level];
            assert_eq!(
                EMPTY_SUBTREE_ROOTS[level + 1],
                hash_pair(&below, &below).unwrap(),
                "level {}",
                level + 1
            );
        }
    }

    #[test]
    fn empty_group_root_comes_from_table() {
        for depth in [1u8, 3, 20, 32] {
            let group = empty_group(depth);
            assert_eq!(group.root, EMPTY_SUBTREE_ROOTS[depth as usize]);
            assert_eq!(group.next_leaf_index, 0);
        }
    }

    #[test]
    fn hash_failure_is_reported_as_such() {
        let path = MerklePath {
            leaf: field(1),
            siblings: vec![[0xff; 32]],
            path_indices: vec![0],
        };
        assert_poll_error(path.compute_root(), PollError::PoseidonHashFailed);
    }

    #[test]
    fn depth_bounds() {
        let mut group = IdentityGroup::zeroed();
        assert_poll_error(group.create(0), PollError::InvalidDepth);
        assert_poll_error(group.create(33), PollError::InvalidDepth);
        assert!(group.create(32).is_ok());
        assert_eq!(group.capacity(), 1u64 << 32);
    }

    #[test]
    fn uninitialized_group_rejects_members() {
        let mut group = IdentityGroup::zeroed();
        assert_poll_error(group.add_member(field(1)), PollError::InvalidDepth);
    }

    #[test]
    fn single_member_root() {
        let mut group = empty_group(2);
        let root = group.add_member(field(7)).unwrap();

        let zero1 = hash_pair(&ZERO_VALUE, &ZERO_VALUE).unwrap();
        let left = hash_pair(&field(7), &ZERO_VALUE).unwrap();
        assert_eq!(root, hash_pair(&left, &zero1).unwrap());
        assert_eq!(group.root, root);
        assert_eq!(group.next_leaf_index, 1);
    }

    #[test]
    fn fills_up_then_rejects() {
        let mut group = empty_group(2);
        for leaf in 1..=4 {
            group.add_member(field(leaf)).unwrap();
        }
        assert!(group.is_full());
        assert_poll_error(group.add_member(field(5)), PollError::TreeFull);
        assert_eq!(group.next_leaf_index, 4);
    }

    #[test]
    fn rejects_out_of_field_commitment() {
        let mut group = empty_group(4);
        assert_poll_error(group.add_member([0xff; 32]), PollError::InvalidCommitment);
        assert_eq!(group.next_leaf_index, 0);
    }

    #[test]
    fn snapshot_paths_fold_to_root() {
        let leaves: Vec<_> = (10..15).map(field).collect();
        let snapshot = MembershipSnapshot::build(4, &leaves).unwrap();

        for index in 0..leaves.len() {
            let path = snapshot.merkle_path(index).unwrap();
            assert_eq!(path.leaf, leaves[index]);
            assert_eq!(path.siblings.len(), 4);
            assert_eq!(path.compute_root().unwrap(), snapshot.root());
        }
        assert!(snapshot.merkle_path(leaves.len()).is_none());
    }

    #[test]
    fn empty_snapshot_matches_empty_group() {
        let snapshot = MembershipSnapshot::build(5, &[]).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.root(), empty_group(5).root);
    }

    #[test]
    fn snapshot_rejects_overflow() {
        let leaves: Vec<_> = (1..=5).map(field).collect();
        assert_poll_error(MembershipSnapshot::build(2, &leaves), PollError::TreeFull);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn incremental_root_matches_snapshot(values in proptest::collection::vec(any::<u64>(), 0..=16)) {
            let leaves: Vec<_> = values.into_iter().map(field).collect();
            let mut group = empty_group(4);
            for leaf in &leaves {
                group.add_member(*leaf).unwrap();
            }
            let snapshot = MembershipSnapshot::build(4, &leaves).unwrap();
            prop_assert_eq!(group.root, snapshot.root());
            prop_assert_eq!(group.next_leaf_index as usize, snapshot.len());
        }
    }
}
