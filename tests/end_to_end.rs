use orbit_tone::wav::{read_header, read_wav_file, HEADER_LEN};
use orbit_tone::{
    write_wav, write_wav_file, FormatTag, OrbitError, PcmFormat, SynthesisParameters, Synthesizer,
};

#[test]
fn one_second_clip_matches_expected_layout() {
    let params = SynthesisParameters::new(1.0, 1.0, 1000);
    let buffer = Synthesizer::default().generate(&params);
    assert_eq!(buffer.len(), 88200);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.wav");
    write_wav_file(&path, buffer.as_slice(), &PcmFormat::default()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 352844);
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");

    let header = read_header(&bytes).unwrap();
    assert_eq!(header.data_size as usize, buffer.len() * 4);
    assert_eq!(header.chunk_size(), 36 + header.data_size);
    assert_eq!(header.format.byte_rate(), 44100 * 2 * 4);
    assert_eq!(header.format.block_align(), 8);
    assert_eq!(header.format.format_tag, FormatTag::Pcm);
}

#[test]
fn written_samples_decode_bit_exact() {
    let buffer = Synthesizer::default().generate(&SynthesisParameters::new(0.5, 2.0, 300));
    let dir = tempfile::tempdir().unwrap();

    for tag in [FormatTag::Pcm, FormatTag::IeeeFloat] {
        let path = dir.path().join(format!("clip_{:?}.wav", tag));
        let format = PcmFormat::default().with_format_tag(tag);
        write_wav_file(&path, buffer.as_slice(), &format).unwrap();

        let (read_format, samples) = read_wav_file(&path).unwrap();
        assert_eq!(read_format.channels, 2);
        assert_eq!(read_format.sample_rate, 44100);
        assert_eq!(samples.as_slice(), buffer.as_slice());
    }
}

#[test]
fn identical_parameters_give_identical_files() {
    let params = SynthesisParameters::new(3.0, 4.5, 640);
    let render = || {
        let buffer = Synthesizer::default().generate(&params);
        let mut bytes = Vec::new();
        write_wav(buffer.as_slice(), &PcmFormat::default(), &mut bytes).unwrap();
        bytes
    };
    assert_eq!(render(), render());
}

#[test]
fn normalized_output_stays_in_range() {
    let synth = Synthesizer::default();
    for params in [
        SynthesisParameters::new(0.1, 0.1, 100),
        SynthesisParameters::new(10.0, 5.0, 2000),
        SynthesisParameters::new(4.2, 2.7, 999),
    ] {
        let buffer = synth.generate(&params);
        assert_eq!(buffer.len(), 2 * (params.duration_ms as usize * 44100 / 1000));
        assert!((buffer.peak() - 1.0).abs() < 1e-6);
        assert!(buffer.as_slice().iter().all(|s| s.abs() <= 1.0));
    }
}

#[test]
fn zero_frame_clip_writes_bare_header() {
    let buffer = Synthesizer::default().generate(&SynthesisParameters::new(1.0, 1.0, 0));
    assert!(buffer.is_empty());

    let mut bytes = Vec::new();
    write_wav(buffer.as_slice(), &PcmFormat::default(), &mut bytes).unwrap();
    assert_eq!(bytes.len(), HEADER_LEN);
    assert_eq!(read_header(&bytes).unwrap().data_size, 0);
}

#[test]
fn unwritable_destination_is_an_error() {
    let buffer = Synthesizer::default().generate(&SynthesisParameters::default());
    let dir = tempfile::tempdir().unwrap();
    let result = write_wav_file(
        dir.path().join("missing").join("output.wav"),
        buffer.as_slice(),
        &PcmFormat::default(),
    );
    assert!(matches!(result, Err(OrbitError::Io(_))));
}
