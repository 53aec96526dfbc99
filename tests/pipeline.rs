use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;
use temp_dir::TempDir;

use ulaw_wav::wav::ULAW_HEADER_LEN;
use ulaw_wav::{concat_files, execute, linear_to_ulaw, transcode_file, Command, WaveError};

fn write_pcm_wav(path: &Path, samples: &[i16]) {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for &sample in samples {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

#[tokio::test]
async fn encode_hound_fixture() {
    let dir = TempDir::new().unwrap();
    let input = dir.child("tone_pcm.wav");
    let output = dir.child("tone_ulaw.wav");

    let samples: Vec<i16> = (0..800).map(|i| ((i as f32 * 0.05).sin() * 12000.0) as i16).collect();
    write_pcm_wav(&input, &samples);

    let transcoded = transcode_file(&input, &output).await.unwrap();
    assert_eq!(transcoded.samples, samples.len());

    let written = std::fs::read(&output).unwrap();
    assert_eq!(written, transcoded.bytes);
    assert_eq!(written.len(), ULAW_HEADER_LEN + samples.len());
    assert_eq!(read_u32(&written, 4) as usize, written.len() - 8);
    assert_eq!(read_u32(&written, 54) as usize, samples.len());

    let expected: Vec<u8> = samples.iter().map(|&s| linear_to_ulaw(s)).collect();
    assert_eq!(&written[ULAW_HEADER_LEN..], &expected[..]);
}

#[tokio::test]
async fn encode_missing_input_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.child("out.wav");

    let err = transcode_file(&dir.child("nope.wav"), &output).await.unwrap_err();
    assert!(matches!(err, WaveError::MissingInput { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn encode_malformed_container_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.child("garbage.wav");
    let output = dir.child("out.wav");
    std::fs::write(&input, b"RIFF\x10\0\0\0WAVEfmt \0\0\0\0").unwrap();

    let err = transcode_file(&input, &output).await.unwrap_err();
    assert!(matches!(err, WaveError::ChunkNotFound { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn encode_then_concat() {
    let dir = TempDir::new().unwrap();
    let (pcm_a, pcm_b) = (dir.child("a_pcm.wav"), dir.child("b_pcm.wav"));
    let (ulaw_a, ulaw_b) = (dir.child("a.wav"), dir.child("b.wav"));
    let joined_path = dir.child("ab.wav");

    write_pcm_wav(&pcm_a, &[0, 1000, -1000, 32767]);
    write_pcm_wav(&pcm_b, &[-32768, 5]);

    execute(Command::Encode { input: pcm_a, output: ulaw_a.clone() }).await.unwrap();
    execute(Command::Encode { input: pcm_b, output: ulaw_b.clone() }).await.unwrap();
    let joined = concat_files(&ulaw_a, &ulaw_b, &joined_path).await.unwrap();

    assert_eq!((joined.first_len, joined.second_len), (4, 2));
    let bytes = std::fs::read(&joined_path).unwrap();
    assert_eq!(read_u32(&bytes, 54), 6);
    assert_eq!(read_u32(&bytes, 46), 6);

    let a = std::fs::read(&ulaw_a).unwrap();
    let b = std::fs::read(&ulaw_b).unwrap();
    let mut expected = a[ULAW_HEADER_LEN..].to_vec();
    expected.extend_from_slice(&b[ULAW_HEADER_LEN..]);
    assert_eq!(&bytes[ULAW_HEADER_LEN..], &expected[..]);
}

#[tokio::test]
async fn concat_missing_second_input_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let pcm = dir.child("a_pcm.wav");
    let first = dir.child("a.wav");
    let output = dir.child("ab.wav");
    write_pcm_wav(&pcm, &[1, 2, 3]);
    transcode_file(&pcm, &first).await.unwrap();

    let result = execute(Command::Concat { first, second: dir.child("missing.wav"), output: output.clone() }).await;
    assert!(result.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn concat_missing_first_input_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let pcm = dir.child("b_pcm.wav");
    let second = dir.child("b.wav");
    let output = dir.child("ab.wav");
    write_pcm_wav(&pcm, &[4, 5, 6]);
    transcode_file(&pcm, &second).await.unwrap();

    let err = concat_files(&dir.child("missing.wav"), &second, &output).await.unwrap_err();
    assert!(matches!(err, WaveError::MissingInput { ref path } if path.ends_with("missing.wav")));
    assert!(!output.exists());
}
