//! End-to-end vote flow against a real Groth16 key and proofs.
//!
//! The circuit here is a stand-in with the same four public inputs as the
//! voting circuit; it binds the nullifier to the poll through
//! `secret * external_nullifier = nullifier_hash`.

use anchor_lang::prelude::Pubkey;
use ark_bn254::{Bn254, Fq, Fr, G1Affine, G2Affine};
use ark_ff::{BigInteger, PrimeField};
use ark_groth16::{Groth16, Proof, ProvingKey};
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError},
};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use bytemuck::Zeroable;
use poll_module::{
    error::PollError,
    merkle::{hash_pair, MembershipSnapshot},
    payload::VotePayload,
    registry,
    state::{ModuleConfig, NullifierRecord, Poll, VoteAdded},
    verifier::{external_nullifier, signal_hash, ProofVerifier, PublicSignals, VerifyingKey, VoteProof},
};

#[derive(Clone, Copy)]
struct VoteCircuit {
    root: Fr,
    nullifier_hash: Fr,
    signal_hash: Fr,
    external_nullifier: Fr,
    secret: Fr,
}

impl ConstraintSynthesizer<Fr> for VoteCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        cs.new_input_variable(|| Ok(self.root))?;
        let nullifier_hash = cs.new_input_variable(|| Ok(self.nullifier_hash))?;
        cs.new_input_variable(|| Ok(self.signal_hash))?;
        let external_nullifier = cs.new_input_variable(|| Ok(self.external_nullifier))?;
        let secret = cs.new_witness_variable(|| Ok(self.secret))?;

        cs.enforce_constraint(
            lc!() + secret,
            lc!() + external_nullifier,
            lc!() + nullifier_hash,
        )?;
        Ok(())
    }
}

fn fq_bytes(value: &Fq) -> Vec<u8> {
    value.into_bigint().to_bytes_be()
}

fn fr_bytes(value: &Fr) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&value.into_bigint().to_bytes_be());
    out
}

fn fr(bytes: &[u8; 32]) -> Fr {
    Fr::from_be_bytes_mod_order(bytes)
}

fn g1_bytes(point: &G1Affine) -> [u8; 64] {
    let mut out = [0u8; 64];
    out[..32].copy_from_slice(&fq_bytes(&point.x));
    out[32..].copy_from_slice(&fq_bytes(&point.y));
    out
}

fn g2_bytes(point: &G2Affine) -> [u8; 128] {
    let mut out = [0u8; 128];
    out[..32].copy_from_slice(&fq_bytes(&point.x.c1));
    out[32..64].copy_from_slice(&fq_bytes(&point.x.c0));
    out[64..96].copy_from_slice(&fq_bytes(&point.y.c1));
    out[96..].copy_from_slice(&fq_bytes(&point.y.c0));
    out
}

fn packed_proof(proof: &Proof<Bn254>) -> [[u8; 32]; 8] {
    let mut bytes = Vec::with_capacity(256);
    bytes.extend_from_slice(&g1_bytes(&proof.a));
    bytes.extend_from_slice(&g2_bytes(&proof.b));
    bytes.extend_from_slice(&g1_bytes(&proof.c));

    let mut words = [[0u8; 32]; 8];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks(32)) {
        word.copy_from_slice(chunk);
    }
    words
}

struct Member {
    secret: Fr,
    commitment: [u8; 32],
}

impl Member {
    fn new(secret: u64, trapdoor: u64) -> Self {
        let secret = Fr::from(secret);
        let commitment = hash_pair(&fr_bytes(&secret), &fr_bytes(&Fr::from(trapdoor))).unwrap();
        Self { secret, commitment }
    }

    fn nullifier_hash(&self, poll_id: u64) -> [u8; 32] {
        fr_bytes(&(self.secret * fr(&external_nullifier(poll_id))))
    }
}

struct Prover {
    proving_key: ProvingKey<Bn254>,
    verifying_key: VerifyingKey,
}

impl Prover {
    fn setup() -> Self {
        let mut rng = StdRng::seed_from_u64(1);
        let dummy = VoteCircuit {
            root: Fr::from(1u64),
            nullifier_hash: Fr::from(6u64),
            signal_hash: Fr::from(1u64),
            external_nullifier: Fr::from(2u64),
            secret: Fr::from(3u64),
        };
        let (proving_key, vk) = Groth16::<Bn254>::circuit_specific_setup(dummy, &mut rng).unwrap();

        let mut ic = [[0u8; 64]; 5];
        for (slot, point) in ic.iter_mut().zip(vk.gamma_abc_g1.iter()) {
            *slot = g1_bytes(point);
        }
        let verifying_key = VerifyingKey {
            alpha_g1: g1_bytes(&vk.alpha_g1),
            beta_g2: g2_bytes(&vk.beta_g2),
            gamma_g2: g2_bytes(&vk.gamma_g2),
            delta_g2: g2_bytes(&vk.delta_g2),
            ic,
        };
        verifying_key.validate().unwrap();

        Self {
            proving_key,
            verifying_key,
        }
    }

    fn ballot(&self, member: &Member, poll: &Poll, vote_value: [u8; 32]) -> VotePayload {
        let nullifier_hash = member.nullifier_hash(poll.id);
        let circuit = VoteCircuit {
            root: fr(&poll.root()),
            nullifier_hash: fr(&nullifier_hash),
            signal_hash: fr(&signal_hash(&vote_value)),
            external_nullifier: fr(&external_nullifier(poll.id)),
            secret: member.secret,
        };
        let mut rng = StdRng::seed_from_u64(2);
        let proof = Groth16::<Bn254>::prove(&self.proving_key, circuit, &mut rng).unwrap();

        VotePayload {
            nullifier_hash,
            vote_value,
            proof: packed_proof(&proof),
        }
    }
}

fn vote(value: u8) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[31] = value;
    out
}

fn expect_error<T>(result: anchor_lang::Result<T>, expected: PollError) {
    let name = expected.to_string();
    let code = u32::from(expected);
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => {
            assert_eq!(err.error_code_number, code, "expected {name}, got {}", err.error_msg)
        }
        Err(other) => panic!("expected {name}, got {other}"),
        Ok(_) => panic!("expected {name}, got Ok"),
    }
}

fn new_config() -> ModuleConfig {
    ModuleConfig::new(
        Pubkey::new_from_array([1u8; 32]),
        Pubkey::new_from_array([2u8; 32]),
        255,
    )
}

fn new_poll(config: &mut ModuleConfig) -> Poll {
    let mut poll = Poll::zeroed();
    registry::create_poll(config, &mut poll, 7, 254).unwrap();
    poll
}

#[test]
fn member_votes_once() {
    let prover = Prover::setup();
    let verifier = ProofVerifier::new(&prover.verifying_key);
    let mut config = new_config();
    let mut poll = new_poll(&mut config);
    assert_eq!(poll.id, 1);

    let alice = Member::new(11, 12);
    let bob = Member::new(21, 22);
    registry::register_identity(&mut poll, alice.commitment).unwrap();
    registry::register_identity(&mut poll, bob.commitment).unwrap();

    let snapshot =
        MembershipSnapshot::build(poll.group.depth, &[alice.commitment, bob.commitment]).unwrap();
    assert_eq!(snapshot.root(), poll.root());
    assert_eq!(snapshot.merkle_path(1).unwrap().compute_root().unwrap(), poll.root());

    let ballot = prover.ballot(&alice, &poll, vote(1));
    let ballot = VotePayload::decode(&ballot.encode()).unwrap();

    let mut record = NullifierRecord::default();
    let VoteAdded {
        poll_id,
        vote_value,
    } = registry::cast_vote(&poll, &mut record, &verifier, &ballot).unwrap();
    assert_eq!(poll_id, 1);
    assert_eq!(vote_value, vote(1));
    assert!(record.spent);
    assert_eq!(record.nullifier_hash, ballot.nullifier_hash);

    // Same identity, different vote: same nullifier record.
    let again = prover.ballot(&alice, &poll, vote(2));
    assert_eq!(again.nullifier_hash, ballot.nullifier_hash);
    expect_error(
        registry::cast_vote(&poll, &mut record, &verifier, &again),
        PollError::NullifierAlreadyUsed,
    );

    let mut bob_record = NullifierRecord::default();
    let bob_ballot = prover.ballot(&bob, &poll, vote(2));
    assert_ne!(bob_ballot.nullifier_hash, ballot.nullifier_hash);
    registry::cast_vote(&poll, &mut bob_record, &verifier, &bob_ballot).unwrap();
}

#[test]
fn proof_is_bound_to_root_poll_and_vote() {
    let prover = Prover::setup();
    let verifier = ProofVerifier::new(&prover.verifying_key);
    let mut config = new_config();
    let _first = new_poll(&mut config);
    let mut poll = new_poll(&mut config);
    assert_eq!(poll.id, 2);

    let carol = Member::new(31, 32);
    registry::register_identity(&mut poll, carol.commitment).unwrap();
    let ballot = prover.ballot(&carol, &poll, vote(3));

    let signals = PublicSignals {
        merkle_root: poll.root(),
        nullifier_hash: ballot.nullifier_hash,
        poll_id: poll.id,
        vote_value: ballot.vote_value,
    };
    let proof = VoteProof::from_packed(&ballot.proof);
    assert!(verifier.verify(&signals, &proof));

    assert!(!verifier.verify(
        &PublicSignals {
            vote_value: vote(4),
            ..signals
        },
        &proof
    ));
    assert!(!verifier.verify(&PublicSignals { poll_id: 1, ..signals }, &proof));

    // A new member moves the root; the earlier proof no longer verifies.
    registry::register_identity(&mut poll, Member::new(41, 42).commitment).unwrap();
    assert!(!verifier.verify(
        &PublicSignals {
            merkle_root: poll.root(),
            ..signals
        },
        &proof
    ));

    let mut record = NullifierRecord::default();
    expect_error(
        registry::cast_vote(&poll, &mut record, &verifier, &ballot),
        PollError::InvalidProof,
    );
    assert!(!record.spent);
}

#[test]
fn closed_poll_rejects_valid_ballot() {
    let prover = Prover::setup();
    let verifier = ProofVerifier::new(&prover.verifying_key);
    let mut config = new_config();
    let mut poll = new_poll(&mut config);

    let dave = Member::new(51, 52);
    registry::register_identity(&mut poll, dave.commitment).unwrap();
    let ballot = prover.ballot(&dave, &poll, vote(1));

    registry::close_poll(&mut poll).unwrap();

    let mut record = NullifierRecord::default();
    expect_error(
        registry::cast_vote(&poll, &mut record, &verifier, &ballot),
        PollError::PollClosed,
    );
    assert!(!record.spent);
}
