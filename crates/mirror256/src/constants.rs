//! Fixed parameters of the Mirror256 construction.

/// Size of a block (and of every layer key and digest) in bytes.
pub const BLOCK_BYTES: usize = 32;

/// Size of a block in bits. Every bit is addressable as a [`crate::Wire`].
pub const BLOCK_BITS: usize = BLOCK_BYTES * 8;

/// Number of gates applied by each of the two sublayers of a layer transform.
pub const GATES_PER_SUBLAYER: usize = BLOCK_BITS / 4;

/// Byte appended to a trailing partial block until it is [`BLOCK_BYTES`] long.
pub const PAD_BYTE: u8 = 0x55;

/// Nominal output size in bits. Accepted by [`crate::Config`] but not used to
/// size anything; blocks are always [`BLOCK_BYTES`] long.
pub const DEFAULT_SIZE: usize = 256;

/// Number of layers used by default, one per entry of [`CUBE_ROOT_PRIME_FRACTIONS`].
pub const DEFAULT_DEPTH: usize = CUBE_ROOT_PRIME_FRACTIONS.len();

/// First 48 bits of the fractional parts of the cube roots of the first 64
/// primes (2..311).
///
/// Seeds the standard layer keys. The upper 32 bits of each entry are the
/// SHA-256 round constants.
pub const CUBE_ROOT_PRIME_FRACTIONS: [u64; 64] = [
    0x428a_2f98_d728, 0x7137_4491_23ef, 0xb5c0_fbcf_ec4d, 0xe9b5_dba5_8189,
    0x3956_c25b_f348, 0x59f1_11f1_b605, 0x923f_82a4_af19, 0xab1c_5ed5_da6d,
    0xd807_aa98_a303, 0x1283_5b01_4570, 0x2431_85be_4ee4, 0x550c_7dc3_d5ff,
    0x72be_5d74_f27b, 0x80de_b1fe_3b16, 0x9bdc_06a7_25c7, 0xc19b_f174_cf69,
    0xe49b_69c1_9ef1, 0xefbe_4786_384f, 0x0fc1_9dc6_8b8c, 0x240c_a1cc_77ac,
    0x2de9_2c6f_592b, 0x4a74_84aa_6ea6, 0x5cb0_a9dc_bd41, 0x76f9_88da_8311,
    0x983e_5152_ee66, 0xa831_c66d_2db4, 0xb003_27c8_98fb, 0xbf59_7fc7_beef,
    0xc6e0_0bf3_3da8, 0xd5a7_9147_930a, 0x06ca_6351_e003, 0x1429_2967_0a0e,
    0x27b7_0a85_46d2, 0x2e1b_2138_5c26, 0x4d2c_6dfc_5ac4, 0x5338_0d13_9d95,
    0x650a_7354_8baf, 0x766a_0abb_3c77, 0x81c2_c92e_47ed, 0x9272_2c85_1482,
    0xa2bf_e8a1_4cf1, 0xa81a_664b_bc42, 0xc24b_8b70_d0f8, 0xc76c_51a3_0654,
    0xd192_e819_d6ef, 0xd699_0624_5565, 0xf40e_3585_5771, 0x106a_a070_32bb,
    0x19a4_c116_b8d2, 0x1e37_6c08_5141, 0x2748_774c_df8e, 0x34b0_bcb5_e19b,
    0x391c_0cb3_c5c9, 0x4ed8_aa4a_e341, 0x5b9c_ca4f_7763, 0x682e_6ff3_d6b2,
    0x748f_82ee_5def, 0x78a5_636f_4317, 0x84c8_7814_a1f0, 0x8cc7_0208_1a64,
    0x90be_fffa_2363, 0xa450_6ceb_de82, 0xbef9_a3f7_b2c6, 0xc671_78f2_e372,
];
