use std::error::Error;
use std::rc::Rc;

use clap::{value_t, App, Arg};
use glfw::Context;

use glgc::{
    DeletionQueue, GlContext, Program, Shader, ShaderType, Texture, TextureTarget, VertexArray,
    VertexBuffer,
};

#[derive(Debug)]
struct DemoArguments {
    /// Use the direct state access constructors where a kind has them.
    modern: bool,
    /// Objects allocated per kind.
    count: usize,
    gl_major: u32,
    gl_minor: u32,
}

impl DemoArguments {
    fn get_app() -> App<'static, 'static> {
        App::new("glgc_demo")
            .version(clap::crate_version!())
            .about("Allocates and releases every kind of OpenGL object")
            .arg(
                Arg::with_name("modern")
                    .long("modern")
                    .short("m")
                    .help("Use glCreate* instead of glGen* (needs OpenGL 4.5)"),
            )
            .arg(
                Arg::with_name("count")
                    .long("count")
                    .short("c")
                    .help("Objects per kind")
                    .takes_value(true)
                    .value_name("n"),
            )
            .arg(
                Arg::with_name("gl-major")
                    .long("gl-major")
                    .help("Requested context major version")
                    .takes_value(true)
                    .value_name("major"),
            )
            .arg(
                Arg::with_name("gl-minor")
                    .long("gl-minor")
                    .help("Requested context minor version")
                    .takes_value(true)
                    .value_name("minor"),
            )
    }

    /// Absent arguments fall back to their defaults, malformed ones are
    /// an error.
    fn from_matches(matches: clap::ArgMatches) -> Result<Self, clap::Error> {
        let modern = matches.is_present("modern");
        let (default_major, default_minor) = if modern { (4, 5) } else { (3, 3) };
        let count = if matches.is_present("count") {
            value_t!(matches, "count", usize)?
        } else {
            4
        };
        let gl_major = if matches.is_present("gl-major") {
            value_t!(matches, "gl-major", u32)?
        } else {
            default_major
        };
        let gl_minor = if matches.is_present("gl-minor") {
            value_t!(matches, "gl-minor", u32)?
        } else {
            default_minor
        };
        Ok(Self {
            modern,
            count,
            gl_major,
            gl_minor,
        })
    }

    fn read_cli() -> Self {
        Self::from_matches(Self::get_app().get_matches()).unwrap_or_else(|e| e.exit())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = DemoArguments::read_cli();
    log::debug!("{:?}", args);

    let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS)?;
    glfw.window_hint(glfw::WindowHint::ContextVersion(args.gl_major, args.gl_minor));
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
        glfw::OpenGlProfileHint::Core,
    ));
    glfw.window_hint(glfw::WindowHint::Visible(false));

    let (mut window, _events) = glfw
        .create_window(64, 64, "glgc", glfw::WindowMode::Windowed)
        .ok_or("glfw window creation failed")?;
    window.make_current();

    // the window stays current on this thread until main returns
    let gl = Rc::new(unsafe { GlContext::load_with(|symbol| window.get_proc_address(symbol)) });
    if args.modern && !gl.supports(4, 5) {
        log::warn!(
            "context is {:?}, modern constructors will fail",
            gl.version()
        );
    }

    let queue = DeletionQueue::new();

    let mut programs = Vec::with_capacity(args.count);
    let mut shaders = Vec::with_capacity(args.count);
    let mut textures = Vec::with_capacity(args.count);
    let mut vertex_arrays = Vec::with_capacity(args.count);
    let mut buffers = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        programs.push(Program::create(&gl)?);
        shaders.push(Shader::create(&gl, ShaderType::Vertex)?);
        if args.modern {
            textures.push(Texture::create(&gl, TextureTarget::Texture2D)?);
            vertex_arrays.push(VertexArray::create(&gl)?);
            buffers.push(VertexBuffer::create(&gl)?);
        } else {
            textures.push(Texture::gen(&gl)?);
            vertex_arrays.push(VertexArray::gen(&gl)?);
            buffers.push(VertexBuffer::gen(&gl)?);
        }
    }
    log::info!(
        "texture ids: {:?}",
        textures.iter().map(|texture| texture.id()).collect::<Vec<_>>()
    );

    // explicit release
    programs.iter_mut().for_each(|program| program.release());
    shaders.iter_mut().for_each(|shader| shader.release());

    // hand the buffers to a worker thread that forgets to give them back
    let deferred: Vec<_> = buffers
        .into_iter()
        .map(|buffer| buffer.into_deferred(&queue))
        .collect();
    std::thread::spawn(move || drop(deferred))
        .join()
        .map_err(|_| "worker thread panicked")?;
    log::info!("{} objects waiting on the deletion queue", queue.pending());
    let deleted = queue.drain(gl.as_ref());
    log::info!("drained {} queued objects", deleted);

    // scoped release of the rest
    drop(programs);
    drop(shaders);
    drop(textures);
    drop(vertex_arrays);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<DemoArguments, clap::Error> {
        let matches = DemoArguments::get_app().get_matches_from_safe(args.iter().copied())?;
        DemoArguments::from_matches(matches)
    }

    #[test]
    fn demo_arguments_defaults() {
        let args = parse(&["glgc_demo"]).unwrap();
        assert!(!args.modern);
        assert_eq!(
            (args.count, args.gl_major, args.gl_minor),
            (4, 3, 3)
        );

        let args = parse(&["glgc_demo", "--modern", "--count", "9"]).unwrap();
        assert!(args.modern);
        assert_eq!(
            (args.count, args.gl_major, args.gl_minor),
            (9, 4, 5)
        );
    }

    #[test]
    fn demo_arguments_reject_malformed_values() {
        let err = parse(&["glgc_demo", "--count", "many"]).unwrap_err();
        assert_eq!(err.kind, clap::ErrorKind::ValueValidation);
        assert!(parse(&["glgc_demo", "--gl-major", "four"]).is_err());
        assert!(parse(&["glgc_demo", "--gl-minor", "-1"]).is_err());
    }
}
