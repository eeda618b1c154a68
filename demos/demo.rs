use bitweave::{Enumeration, Record, Scaled, Union};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Clone, Copy, PartialEq, Enumeration)]
enum Role {
    #[default]
    Player,
    Leader,
    DictionaryEditor,
    Moderator,
    Developer,
}

type Health = Scaled<u8, 0x0000_0000, 0x42C8_0000>;

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Player {
    id: i32,
    name: String,
    role: Role,
    health: Health,
    ready: bool,
}

#[derive(Debug, Clone, PartialEq, Union)]
enum Event {
    Joined(Player),
    Left { id: i32 },
    Chat { id: i32, message: String },
    Tick,
}

impl Default for Event {
    fn default() -> Self {
        Event::Tick
    }
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Frame {
    sequence: u32,
    events: Vec<Event>,
    winner: Option<i32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let frame = Frame {
        sequence: 42,
        events: vec![
            Event::Joined(Player {
                id: 7,
                name: "ada".to_string(),
                role: Role::Moderator,
                health: Health::new(87.5)?,
                ready: true,
            }),
            Event::Chat {
                id: 7,
                message: "hello".to_string(),
            },
            Event::Tick,
            Event::Left { id: 3 },
        ],
        winner: None,
    };

    let bytes = bitweave::pack(&frame)?;
    println!("{}", bitweave::to_string(&frame));
    println!("{:?}, bytes: {}, bits: {}", bytes, bytes.len(), bitweave::bit_length(&frame));

    let decoded = bitweave::unpack::<Frame>(&bytes)?;
    assert_eq!(decoded, frame);
    dbg!(&decoded);

    // a frame cut short never produces a partial value
    let mut target = Frame::default();
    if let Err(error) = bitweave::unpack_from(&bytes[..bytes.len() / 2], &mut target) {
        println!("truncated frame: {error}");
    }
    assert_eq!(target, Frame::default());

    Ok(())
}
