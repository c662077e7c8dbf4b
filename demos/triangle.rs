#[macro_use]
extern crate orion;

use orion::{
    ClearOp,
    Config,
    DrawCall,
    Factory,
    Frame,
    Handler,
    Key,
    Action,
    Mesh,
    Modifiers,
    Program,
    Rect,
    ShaderKind,
};

const VERTEX_SHADER: &str = r#"
#version 450 core

layout(location = 0) in vec2 a_Position;
layout(location = 1) in vec4 a_Color;

uniform mat4 u_Transform;

out vec4 v_Color;

void main() {
    v_Color = a_Color;
    gl_Position = u_Transform * vec4(a_Position, 0.0, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"
#version 450 core

in vec4 v_Color;
out vec4 f_Color;

void main() {
    f_Color = v_Color;
}
"#;

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 2],
    color: [u8; 4],
}

impl_vertex!(Vertex {
    position: F32(2),
    color: U8Norm(4),
});

const TRIANGLE: &[Vertex] = &[
    Vertex { position: [0.0, 0.0], color: [255, 0, 0, 255] },
    Vertex { position: [1.0, 0.0], color: [0, 255, 0, 255] },
    Vertex { position: [0.5, 1.0], color: [0, 0, 255, 255] },
];

struct App {
    program: Program,
    transform: i32,
    mesh: Mesh<Vertex>,
    triangle: Rect,
    angle: f32,
}

impl App {
    fn new(factory: &Factory) -> orion::Result<Self> {
        let vs = factory.shader(ShaderKind::Vertex, VERTEX_SHADER)?;
        let fs = factory.shader(ShaderKind::Fragment, FRAGMENT_SHADER)?;
        let program = factory.program(&[&vs, &fs])?;
        let transform = factory.uniform_location(&program, "u_Transform").unwrap_or(-1);
        let indices = factory.buffer(&[0u32, 1, 2]);
        let mesh = factory.mesh(TRIANGLE, &indices);
        let triangle = Rect::new(glam::Vec2::ZERO, 200.0, 200.0);
        Ok(App { program, transform, mesh, triangle, angle: 0.0 })
    }
}

impl Handler for App {
    fn on_key(&mut self, frame: &mut Frame, key: Key, action: Action, _modifiers: Modifiers) {
        if key == Key::Escape && action == Action::Pressed {
            frame.close();
        }
    }

    fn on_tick(&mut self, _frame: &mut Frame, dt: f32) {
        self.angle += dt;
    }

    fn on_render(&mut self, frame: &mut Frame, _dt: f32) {
        let screen = Rect::new(glam::Vec2::ZERO, frame.width() as f32, frame.height() as f32);
        let triangle = self.triangle.centered(screen.size() / 2.0);
        let transform = screen.projection()
            * glam::Mat4::from_translation(triangle.position.extend(0.0))
            * glam::Mat4::from_rotation_z(self.angle.sin() * 0.25)
            * glam::Mat4::from_scale(glam::Vec3::new(triangle.width, triangle.height, 1.0));

        let factory = frame.factory();
        factory.clear(frame.framebuffer(), ClearOp::color_depth(0.1, 0.1, 0.1, 1.0));
        factory.use_program(&self.program);
        factory.set_uniform(&self.program, self.transform, transform);
        factory.bind_mesh(&self.mesh);
        factory.draw(&DrawCall::triangles(self.mesh.indices().len()));
    }
}

fn main() {
    env_logger::init();

    let config = Config::new("triangle", 640, 480).with_vsync(true);
    let mut frame = match Frame::new(&config) {
        Ok(frame) => frame,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };
    let mut app = match App::new(frame.factory()) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };
    frame.run(&mut app, 60, 0);
}
