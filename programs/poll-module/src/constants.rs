// ============================================================================
// SEEDS FOR PDA DERIVATION
// ============================================================================

pub const MODULE_CONFIG_SEED: &[u8] = b"module_config";

pub const VERIFYING_KEY_SEED: &[u8] = b"verifying_key";

pub const POLL_SEED: &[u8] = b"poll";

pub const PUBLICATION_SEED: &[u8] = b"publication";

pub const NULLIFIER_SEED: &[u8] = b"nullifier";

// ============================================================================
// MERKLE TREE CONFIGURATION
// ============================================================================

/// Depth of every poll's identity group (2^20 = ~1M voters).
/// Must match the depth the voting circuit was compiled for.
pub const TREE_DEPTH: u8 = 20;

/// Upper bound accepted by `IdentityGroup::create`; sizes the zero-copy arrays.
pub const MAX_TREE_DEPTH: usize = 32;

/// Value of an empty leaf.
pub const ZERO_VALUE: [u8; 32] = [0u8; 32];

// ============================================================================
// POLLS & PAYLOADS
// ============================================================================

/// Poll ids are allocated sequentially starting here; 0 means "no poll".
pub const FIRST_POLL_ID: u64 = 1;

/// Number of public signals the voting circuit exposes.
pub const PUBLIC_INPUTS: usize = 4;

/// One IC point per public input plus the constant term.
pub const VK_IC_LEN: usize = PUBLIC_INPUTS + 1;

/// ABI-encoded `(uint256, bytes32, uint256[8])`.
pub const VOTE_PAYLOAD_LEN: usize = 32 * 10;

// ============================================================================
// EMPTY SUBTREE ROOTS
// ============================================================================

/// `EMPTY_SUBTREE_ROOTS[level]` is the root of an empty subtree of height `level`:
/// `ZERO_VALUE` at level 0, then `PoseidonT3(z, z)` of the level below.
pub const EMPTY_SUBTREE_ROOTS: [[u8; 32]; MAX_TREE_DEPTH + 1] = [
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    [
        0x20, 0x98, 0xf5, 0xfb, 0x9e, 0x23, 0x9e, 0xab,
        0x3c, 0xea, 0xc3, 0xf2, 0x7b, 0x81, 0xe4, 0x81,
        0xdc, 0x31, 0x24, 0xd5, 0x5f, 0xfe, 0xd5, 0x23,
        0xa8, 0x39, 0xee, 0x84, 0x46, 0xb6, 0x48, 0x64,
    ],
    [
        0x10, 0x69, 0x67, 0x3d, 0xcd, 0xb1, 0x22, 0x63,
        0xdf, 0x30, 0x1a, 0x6f, 0xf5, 0x84, 0xa7, 0xec,
        0x26, 0x1a, 0x44, 0xcb, 0x9d, 0xc6, 0x8d, 0xf0,
        0x67, 0xa4, 0x77, 0x44, 0x60, 0xb1, 0xf1, 0xe1,
    ],
    [
        0x18, 0xf4, 0x33, 0x31, 0x53, 0x7e, 0xe2, 0xaf,
        0x2e, 0x3d, 0x75, 0x8d, 0x50, 0xf7, 0x21, 0x06,
        0x46, 0x7c, 0x6e, 0xea, 0x50, 0x37, 0x1d, 0xd5,
        0x28, 0xd5, 0x7e, 0xb2, 0xb8, 0x56, 0xd2, 0x38,
    ],
    [
        0x07, 0xf9, 0xd8, 0x37, 0xcb, 0x17, 0xb0, 0xd3,
        0x63, 0x20, 0xff, 0xe9, 0x3b, 0xa5, 0x23, 0x45,
        0xf1, 0xb7, 0x28, 0x57, 0x1a, 0x56, 0x82, 0x65,
        0xca, 0xac, 0x97, 0x55, 0x9d, 0xbc, 0x95, 0x2a,
    ],
    [
        0x2b, 0x94, 0xcf, 0x5e, 0x87, 0x46, 0xb3, 0xf5,
        0xc9, 0x63, 0x1f, 0x4c, 0x5d, 0xf3, 0x29, 0x07,
        0xa6, 0x99, 0xc5, 0x8c, 0x94, 0xb2, 0xad, 0x4d,
        0x7b, 0x5c, 0xec, 0x16, 0x39, 0x18, 0x3f, 0x55,
    ],
    [
        0x2d, 0xee, 0x93, 0xc5, 0xa6, 0x66, 0x45, 0x96,
        0x46, 0xea, 0x7d, 0x22, 0xcc, 0xa9, 0xe1, 0xbc,
        0xfe, 0xd7, 0x1e, 0x69, 0x51, 0xb9, 0x53, 0x61,
        0x1d, 0x11, 0xdd, 0xa3, 0x2e, 0xa0, 0x9d, 0x78,
    ],
    [
        0x07, 0x82, 0x95, 0xe5, 0xa2, 0x2b, 0x84, 0xe9,
        0x82, 0xcf, 0x60, 0x1e, 0xb6, 0x39, 0x59, 0x7b,
        0x8b, 0x05, 0x15, 0xa8, 0x8c, 0xb5, 0xac, 0x7f,
        0xa8, 0xa4, 0xaa, 0xbe, 0x3c, 0x87, 0x34, 0x9d,
    ],
    [
        0x2f, 0xa5, 0xe5, 0xf1, 0x8f, 0x60, 0x27, 0xa6,
        0x50, 0x1b, 0xec, 0x86, 0x45, 0x64, 0x47, 0x2a,
        0x61, 0x6b, 0x2e, 0x27, 0x4a, 0x41, 0x21, 0x1a,
        0x44, 0x4c, 0xbe, 0x3a, 0x99, 0xf3, 0xcc, 0x61,
    ],
    [
        0x0e, 0x88, 0x43, 0x76, 0xd0, 0xd8, 0xfd, 0x21,
        0xec, 0xb7, 0x80, 0x38, 0x9e, 0x94, 0x1f, 0x66,
        0xe4, 0x5e, 0x7a, 0xcc, 0xe3, 0xe2, 0x28, 0xab,
        0x3e, 0x21, 0x56, 0xa6, 0x14, 0xfc, 0xd7, 0x47,
    ],
    [
        0x1b, 0x72, 0x01, 0xda, 0x72, 0x49, 0x4f, 0x1e,
        0x28, 0x71, 0x7a, 0xd1, 0xa5, 0x2e, 0xb4, 0x69,
        0xf9, 0x58, 0x92, 0xf9, 0x57, 0x71, 0x35, 0x33,
        0xde, 0x61, 0x75, 0xe5, 0xda, 0x19, 0x0a, 0xf2,
    ],
    [
        0x1f, 0x8d, 0x88, 0x22, 0x72, 0x5e, 0x36, 0x38,
        0x52, 0x00, 0xc0, 0xb2, 0x01, 0x24, 0x98, 0x19,
        0xa6, 0xe6, 0xe1, 0xe4, 0x65, 0x08, 0x08, 0xb5,
        0xbe, 0xbc, 0x6b, 0xfa, 0xce, 0x7d, 0x76, 0x36,
    ],
    [
        0x2c, 0x5d, 0x82, 0xf6, 0x6c, 0x91, 0x4b, 0xaf,
        0xb9, 0x70, 0x15, 0x89, 0xba, 0x8c, 0xfc, 0xfb,
        0x61, 0x62, 0xb0, 0xa1, 0x2a, 0xcf, 0x88, 0xa8,
        0xd0, 0x87, 0x9a, 0x04, 0x71, 0xb5, 0xf8, 0x5a,
    ],
    [
        0x14, 0xc5, 0x41, 0x48, 0xa0, 0x94, 0x0b, 0xb8,
        0x20, 0x95, 0x7f, 0x5a, 0xdf, 0x3f, 0xa1, 0x13,
        0x4e, 0xf5, 0xc4, 0xaa, 0xa1, 0x13, 0xf4, 0x64,
        0x64, 0x58, 0xf2, 0x70, 0xe0, 0xbf, 0xbf, 0xd0,
    ],
    [
        0x19, 0x0d, 0x33, 0xb1, 0x2f, 0x98, 0x6f, 0x96,
        0x1e, 0x10, 0xc0, 0xee, 0x44, 0xd8, 0xb9, 0xaf,
        0x11, 0xbe, 0x25, 0x58, 0x8c, 0xad, 0x89, 0xd4,
        0x16, 0x11, 0x8e, 0x4b, 0xf4, 0xeb, 0xe8, 0x0c,
    ],
    [
        0x22, 0xf9, 0x8a, 0xa9, 0xce, 0x70, 0x41, 0x52,
        0xac, 0x17, 0x35, 0x49, 0x14, 0xad, 0x73, 0xed,
        0x11, 0x67, 0xae, 0x65, 0x96, 0xaf, 0x51, 0x0a,
        0xa5, 0xb3, 0x64, 0x93, 0x25, 0xe0, 0x6c, 0x92,
    ],
    [
        0x2a, 0x7c, 0x7c, 0x9b, 0x6c, 0xe5, 0x88, 0x0b,
        0x9f, 0x6f, 0x22, 0x8d, 0x72, 0xbf, 0x6a, 0x57,
        0x5a, 0x52, 0x6f, 0x29, 0xc6, 0x6e, 0xcc, 0xee,
        0xf8, 0xb7, 0x53, 0xd3, 0x8b, 0xba, 0x73, 0x23,
    ],
    [
        0x2e, 0x81, 0x86, 0xe5, 0x58, 0x69, 0x8e, 0xc1,
        0xc6, 0x7a, 0xf9, 0xc1, 0x4d, 0x46, 0x3f, 0xfc,
        0x47, 0x00, 0x43, 0xc9, 0xc2, 0x98, 0x8b, 0x95,
        0x4d, 0x75, 0xdd, 0x64, 0x3f, 0x36, 0xb9, 0x92,
    ],
    [
        0x0f, 0x57, 0xc5, 0x57, 0x1e, 0x9a, 0x4e, 0xab,
        0x49, 0xe2, 0xc8, 0xcf, 0x05, 0x0d, 0xae, 0x94,
        0x8a, 0xef, 0x6e, 0xad, 0x64, 0x73, 0x92, 0x27,
        0x35, 0x46, 0x24, 0x9d, 0x1c, 0x1f, 0xf1, 0x0f,
    ],
    [
        0x18, 0x30, 0xee, 0x67, 0xb5, 0xfb, 0x55, 0x4a,
        0xd5, 0xf6, 0x3d, 0x43, 0x88, 0x80, 0x0e, 0x1c,
        0xfe, 0x78, 0xe3, 0x10, 0x69, 0x7d, 0x46, 0xe4,
        0x3c, 0x9c, 0xe3, 0x61, 0x34, 0xf7, 0x2c, 0xca,
    ],
    [
        0x21, 0x34, 0xe7, 0x6a, 0xc5, 0xd2, 0x1a, 0xab,
        0x18, 0x6c, 0x2b, 0xe1, 0xdd, 0x8f, 0x84, 0xee,
        0x88, 0x0a, 0x1e, 0x46, 0xea, 0xf7, 0x12, 0xf9,
        0xd3, 0x71, 0xb6, 0xdf, 0x22, 0x19, 0x1f, 0x3e,
    ],
    [
        0x19, 0xdf, 0x90, 0xec, 0x84, 0x4e, 0xbc, 0x4f,
        0xfe, 0xeb, 0xd8, 0x66, 0xf3, 0x38, 0x59, 0xb0,
        0xc0, 0x51, 0xd8, 0xc9, 0x58, 0xee, 0x3a, 0xa8,
        0x8f, 0x8f, 0x8d, 0xf3, 0xdb, 0x91, 0xa5, 0xb1,
    ],
    [
        0x18, 0xcc, 0xa2, 0xa6, 0x6b, 0x5c, 0x07, 0x87,
        0x98, 0x1e, 0x69, 0xae, 0xfd, 0x84, 0x85, 0x2d,
        0x74, 0xaf, 0x0e, 0x93, 0xef, 0x49, 0x12, 0xb4,
        0x64, 0x8c, 0x05, 0xf7, 0x22, 0xef, 0xe5, 0x2b,
    ],
    [
        0x23, 0x88, 0x90, 0x94, 0x15, 0x23, 0x0d, 0x1b,
        0x4d, 0x13, 0x04, 0xd2, 0xd5, 0x4f, 0x47, 0x3a,
        0x62, 0x83, 0x38, 0xf2, 0xef, 0xad, 0x83, 0xfa,
        0xdf, 0x05, 0x64, 0x45, 0x49, 0xd2, 0x53, 0x8d,
    ],
    [
        0x27, 0x17, 0x1f, 0xb4, 0xa9, 0x7b, 0x6c, 0xc0,
        0xe9, 0xe8, 0xf5, 0x43, 0xb5, 0x29, 0x4d, 0xe8,
        0x66, 0xa2, 0xaf, 0x2c, 0x9c, 0x8d, 0x0b, 0x1d,
        0x96, 0xe6, 0x73, 0xe4, 0x52, 0x9e, 0xd5, 0x40,
    ],
    [
        0x2f, 0xf6, 0x65, 0x05, 0x40, 0xf6, 0x29, 0xfd,
        0x57, 0x11, 0xa0, 0xbc, 0x74, 0xfc, 0x0d, 0x28,
        0xdc, 0xb2, 0x30, 0xb9, 0x39, 0x25, 0x83, 0xe5,
        0xf8, 0xd5, 0x96, 0x96, 0xdd, 0xe6, 0xae, 0x21,
    ],
    [
        0x12, 0x0c, 0x58, 0xf1, 0x43, 0xd4, 0x91, 0xe9,
        0x59, 0x02, 0xf7, 0xf5, 0x27, 0x77, 0x78, 0xa2,
        0xe0, 0xad, 0x51, 0x68, 0xf6, 0xad, 0xd7, 0x56,
        0x69, 0x93, 0x26, 0x30, 0xce, 0x61, 0x15, 0x18,
    ],
    [
        0x1f, 0x21, 0xfe, 0xb7, 0x0d, 0x3f, 0x21, 0xb0,
        0x7b, 0xf8, 0x53, 0xd5, 0xe5, 0xdb, 0x03, 0x07,
        0x1e, 0xc4, 0x95, 0xa0, 0xa5, 0x65, 0xa2, 0x1d,
        0xa2, 0xd6, 0x65, 0xd2, 0x79, 0x48, 0x37, 0x95,
    ],
    [
        0x24, 0xbe, 0x90, 0x5f, 0xa7, 0x13, 0x35, 0xe1,
        0x4c, 0x63, 0x8c, 0xc0, 0xf6, 0x6a, 0x86, 0x23,
        0xa8, 0x26, 0xe7, 0x68, 0x06, 0x8a, 0x9e, 0x96,
        0x8b, 0xb1, 0xa1, 0xdd, 0xe1, 0x8a, 0x72, 0xd2,
    ],
    [
        0x0f, 0x86, 0x66, 0xb6, 0x2e, 0xd1, 0x74, 0x91,
        0xc5, 0x0c, 0xea, 0xde, 0xad, 0x57, 0xd4, 0xcd,
        0x59, 0x7e, 0xf3, 0x82, 0x1d, 0x65, 0xc3, 0x28,
        0x74, 0x4c, 0x74, 0xe5, 0x53, 0xda, 0xc2, 0x6d,
    ],
    [
        0x09, 0x18, 0xd4, 0x6b, 0xf5, 0x2d, 0x98, 0xb0,
        0x34, 0x41, 0x3f, 0x4a, 0x1a, 0x1c, 0x41, 0x59,
        0x4e, 0x7a, 0x7a, 0x3f, 0x6a, 0xe0, 0x8c, 0xb4,
        0x3d, 0x1a, 0x2a, 0x23, 0x0e, 0x19, 0x59, 0xef,
    ],
    [
        0x1b, 0xbe, 0xb0, 0x1b, 0x4c, 0x47, 0x9e, 0xcd,
        0xe7, 0x69, 0x17, 0x64, 0x5e, 0x40, 0x4d, 0xfa,
        0x2e, 0x26, 0xf9, 0x0d, 0x0a, 0xfc, 0x5a, 0x65,
        0x12, 0x85, 0x13, 0xad, 0x37, 0x5c, 0x5f, 0xf2,
    ],
    [
        0x2f, 0x68, 0xa1, 0xc5, 0x8e, 0x25, 0x7e, 0x42,
        0xa1, 0x7a, 0x6c, 0x61, 0xdf, 0xf5, 0x55, 0x1e,
        0xd5, 0x60, 0xb9, 0x92, 0x2a, 0xb1, 0x19, 0xd5,
        0xac, 0x8e, 0x18, 0x4c, 0x97, 0x34, 0xea, 0xd9,
    ],
];
